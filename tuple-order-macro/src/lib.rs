//! Procedural macros used by the `tuple-order` crate to generate its per-arity tuple impls.

extern crate proc_macro;

use {
    proc_macro::TokenStream,
    proc_macro2::TokenStream as TokenStream2,
    quote::{format_ident, quote},
    syn::{parse_macro_input, Index, LitInt},
};

/// Generate the `Tuple`, `List` and `Orderable` impls for every tuple arity from `1` up to and
/// including the given literal.
///
/// This is only meaningful inside the `tuple-order` crate itself, since the generated code refers
/// to its traits through `crate::` paths.
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    let max = match max.base10_parse::<usize>() {
        Ok(max) => max,
        Err(err) => return err.to_compile_error().into(),
    };
    (1..=max).map(arity_impls).collect::<TokenStream2>().into()
}

/// Right-nest a sequence of items into an inductive list `(a, (b, (c, ())))`.
fn nest(items: impl DoubleEndedIterator<Item = TokenStream2>) -> TokenStream2 {
    items.rev().fold(quote!(()), |rest, item| quote!((#item, #rest)))
}

fn arity_impls(arity: usize) -> TokenStream2 {
    let params = (0..arity)
        .map(|i| format_ident!("T{}", i))
        .collect::<Vec<_>>();
    let values = (0..arity)
        .map(|i| format_ident!("t{}", i))
        .collect::<Vec<_>>();
    let indices = (0..arity).map(Index::from).collect::<Vec<_>>();

    let list = nest(params.iter().map(|p| quote!(#p)));
    let list_pattern = nest(values.iter().map(|v| quote!(#v)));
    let this_refs = nest(indices.iter().map(|i| quote!(&this.#i)));
    let other_refs = nest(indices.iter().map(|i| quote!(&other.#i)));

    quote! {
        impl<#(#params),*> crate::tuple::Tuple for (#(#params,)*) {
            type AsList = #list;

            fn into_list(self) -> Self::AsList {
                let (#(#values,)*) = self;
                #list_pattern
            }
        }

        impl<#(#params),*> crate::tuple::List for #list {
            type AsTuple = (#(#params,)*);

            fn into_tuple(self) -> Self::AsTuple {
                let #list_pattern = self;
                (#(#values,)*)
            }
        }

        impl<#(#params: crate::field::Field),*> crate::Orderable for (#(#params,)*) {
            type Chain = <#list as crate::order::EachField>::Chain;

            fn chain() -> Self::Chain {
                <#list as crate::order::EachField>::chain()
            }

            fn compare_with(
                chain: &Self::Chain,
                this: &Self,
                other: &Self,
            ) -> ::core::cmp::Ordering {
                crate::order::CompareAgainst::compare_against(
                    &crate::order::Bind::bind(chain, #this_refs),
                    #other_refs,
                )
            }
        }
    }
}
