/// A ternary expression handler.  While it may seem redundant, it keeps
/// the matrix of border-handling rules in the carving loops readable as
/// single lines, where `cargo fmt` would otherwise break each `if` into
/// four.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
