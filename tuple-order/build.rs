use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{env, error::Error};

/// The largest tuple arity the crate implements `Orderable` for.
const MAX_ARITY: usize = 10;

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate one unit test per supported tuple arity, so that every arity produced by
    // the `impl_tuples!` macro is exercised at every field position.
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("arity_tests.rs");
    let mut f = File::create(&dest_path)?;

    // File header
    writeln!(f, "use crate::{{order, tuple::HasLength, Orderable, Ordered}};")?;
    writeln!(f, "use std::cmp::Ordering::*;")?;
    writeln!(f)?;
    writeln!(
        f,
        "fn arity_of<T: Orderable>(_: &Ordered<T>) -> usize where T::AsList: HasLength {{"
    )?;
    writeln!(f, "    Ordered::<T>::ARITY")?;
    writeln!(f, "}}")?;

    for arity in 1..=MAX_ARITY {
        writeln!(f)?;
        write_arity_test(&mut f, arity)?;
    }
    Ok(())
}

fn write_arity_test(f: &mut File, arity: usize) -> Result<(), Box<dyn Error>> {
    let kinds = (0..arity).map(Kind::at).collect::<Vec<_>>();
    let base = Row::new(&kinds, |_| Level::Mid);

    writeln!(f, "#[test]")?;
    writeln!(f, "fn arity_{}() {{", arity)?;
    writeln!(f, "    let base = order({});", base)?;
    writeln!(f, "    assert_eq!(arity_of(&base), {});", arity)?;
    writeln!(f, "    assert_eq!(base.compare_to(&order({})), Equal);", base)?;
    writeln!(f, "    assert_eq!(base, order({}));", base)?;

    for k in 0..arity {
        // Field `k` decides, no matter what the fields after it hold.
        let bumped = Row::new(&kinds, |i| level_around(i, k, Level::High, Level::Low));
        let lowered = Row::new(&kinds, |i| level_around(i, k, Level::Low, Level::High));
        writeln!(f, "    assert!(order({}) > base);", bumped)?;
        writeln!(f, "    assert!(order({}) < base);", lowered)?;
        writeln!(f, "    assert_eq!(base.compare_to(&order({})), Less);", bumped)?;

        if kinds[k].absent().is_some() {
            let absent = Row::new(&kinds, |i| level_around(i, k, Level::Absent, Level::High));
            writeln!(f, "    {{")?;
            writeln!(f, "        let absent = order({});", absent)?;
            writeln!(f, "        assert!(absent < base);")?;
            writeln!(f, "        assert_eq!(absent.compare_to(&absent.clone()), Equal);")?;
            writeln!(f, "    }}")?;
        }
    }

    writeln!(f, "}}")?;
    Ok(())
}

/// The level of field `i` in a row where field `k` is set to `at`, earlier fields tie with the
/// base row, and later fields are set to `after`.
fn level_around(i: usize, k: usize, at: Level, after: Level) -> Level {
    use std::cmp::Ordering::*;
    match i.cmp(&k) {
        Less => Level::Mid,
        Equal => at,
        Greater => after,
    }
}

#[derive(Clone, Copy, Debug)]
enum Level {
    Absent,
    Low,
    Mid,
    High,
}

/// The field types cycled through by the generated tests.
#[derive(Clone, Copy, Debug)]
enum Kind {
    I32,
    OptionStr,
    U8,
    OptionI64,
    Char,
}

impl Kind {
    fn at(position: usize) -> Kind {
        use Kind::*;
        [I32, OptionStr, U8, OptionI64, Char][position % 5]
    }

    fn absent(self) -> Option<&'static str> {
        match self {
            Kind::OptionStr | Kind::OptionI64 => Some("None"),
            _ => None,
        }
    }

    fn literal(self, level: Level) -> &'static str {
        use Kind::*;
        use Level::*;
        match (self, level) {
            (_, Absent) => self.absent().unwrap_or("<never absent>"),
            (I32, Low) => "-1_i32",
            (I32, Mid) => "0_i32",
            (I32, High) => "1_i32",
            (OptionStr, Low) => "Some(\"a\")",
            (OptionStr, Mid) => "Some(\"m\")",
            (OptionStr, High) => "Some(\"z\")",
            (U8, Low) => "0_u8",
            (U8, Mid) => "5_u8",
            (U8, High) => "9_u8",
            (OptionI64, Low) => "Some(-5_i64)",
            (OptionI64, Mid) => "Some(0_i64)",
            (OptionI64, High) => "Some(5_i64)",
            (Char, Low) => "'a'",
            (Char, Mid) => "'m'",
            (Char, High) => "'z'",
        }
    }
}

/// A tuple expression with one literal per field.
struct Row(Vec<&'static str>);

impl Row {
    fn new(kinds: &[Kind], level: impl Fn(usize) -> Level) -> Row {
        Row(kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| kind.literal(level(i)))
            .collect())
    }
}

impl Display for Row {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "(")?;
        for (i, literal) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", literal)?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}
