//! Built-in grid tables. Other layouts can be loaded with
//! [`KeyGrid::from_file`](crate::KeyGrid::from_file).

use crate::error::Result;
use crate::grid::{GridTable, KeyGrid};

const N: Option<&str> = None;

/// German QWERTZ BlackWidow with the macro column on the left.
///
/// The keypad keys carry a `num` prefix so they do not collide with the main
/// block (`-`, `+`).
#[rustfmt::skip]
pub const QWERTZ: GridTable = [
    [N, Some("esc"), N,
     Some("f1"), Some("f2"), Some("f3"), Some("f4"), Some("f5"), Some("f6"),
     Some("f7"), Some("f8"), Some("f9"), Some("f10"), Some("f11"), Some("f12"),
     Some("prtsc"), Some("scrlk"), Some("break"), N, N, N, N],
    [Some("m1"), Some("§"),
     Some("1"), Some("2"), Some("3"), Some("4"), Some("5"), Some("6"), Some("7"), Some("8"),
     Some("9"), Some("0"), Some("'"), Some("^"), Some("backspace"),
     Some("insert"), Some("home"), Some("pgup"),
     Some("numlk"), Some("num/"), Some("num*"), Some("num-")],
    [Some("m2"), Some("tab"),
     Some("q"), Some("w"), Some("e"), Some("r"), Some("t"), Some("z"), Some("u"), Some("i"),
     Some("o"), Some("p"), Some("è"), Some("¨"), Some("return"),
     Some("del"), Some("end"), Some("pgdown"),
     Some("num7"), Some("num8"), Some("num9"), Some("num+")],
    [Some("m3"), Some("capslk"),
     Some("a"), Some("s"), Some("d"), Some("f"), Some("g"), Some("h"), Some("j"), Some("k"),
     Some("l"), Some("é"), Some("à"), Some("$"), N,
     N, N, N,
     Some("num4"), Some("num5"), Some("num6"), N],
    [Some("m4"), Some("shift"),
     Some("<"), Some("y"), Some("x"), Some("c"), Some("v"), Some("b"), Some("n"), Some("m"),
     Some(","), Some("."), Some("-"), N, Some("rshift"),
     N, Some("up"), N,
     Some("num1"), Some("num2"), Some("num3"), Some("enter")],
    [Some("m5"), Some("ctrl"), Some("win"), Some("alt"),
     N, N, N, Some(" "), N, N, N,
     Some("altgr"), Some("fn"), Some("menu"), Some("rctrl"),
     Some("left"), Some("down"), Some("right"),
     N, Some("num0"), Some("num."), N],
];

/// The QWERTZ table as a `KeyGrid`
pub fn qwertz() -> Result<KeyGrid> {
    KeyGrid::from_table("qwertz", &QWERTZ)
}
