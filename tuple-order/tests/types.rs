use {
    static_assertions::{assert_eq_size, assert_impl_all, assert_not_impl_any, assert_type_eq_all},
    std::{rc::Rc, sync::Arc},
    tuple_order::{
        order::{End, Order},
        Orderable, Ordered,
    },
};

assert_type_eq_all!(<(u8,) as Orderable>::Chain, Order<u8, End>);
assert_type_eq_all!(
    <(Option<&'static str>, i32, String) as Orderable>::Chain,
    Order<Option<&'static str>, Order<i32, Order<String, End>>>
);
assert_type_eq_all!(
    <(u8, u8, u8, u8, u8, u8, u8, u8, u8, char) as Orderable>::Chain,
    Order<u8, Order<u8, Order<u8, Order<u8, Order<u8, Order<u8, Order<u8, Order<u8, Order<u8, Order<char, End>>>>>>>>>>
);

// The chain costs nothing on top of the tuple.
assert_eq_size!(Ordered<(u64, Option<u32>)>, (u64, Option<u32>));

assert_impl_all!(Ordered<(Arc<str>, Option<Vec<u8>>)>: Ord, Send, Sync, Clone);
assert_not_impl_any!(Ordered<(Rc<u8>, u8)>: Send, Sync);
assert_not_impl_any!((u8, f64): Orderable);
assert_not_impl_any!((): Orderable);
