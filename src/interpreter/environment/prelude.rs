use std::f64::consts::{E, PI};

use crate::interpreter::{
    environment::Environment,
    value::complex::{I, NAN, Number},
};

/// Defines the standard bindings by generating an install function and a
/// name list per kind.
///
/// The macro produces:
/// - `STANDARD_CONSTANTS`, `STANDARD_FUNCTIONS`, `STANDARD_FUNCTIONS2` (public
///   name lists),
/// - `install` (seeds an environment with every entry).
macro_rules! standard_bindings {
    (
        constants { $($cname:literal => $cvalue:expr),* $(,)? }
        functions { $($fname:literal => $func:expr),* $(,)? }
        functions2 { $($gname:literal => $func2:expr),* $(,)? }
    ) => {
        /// Names of the standard constants.
        pub const STANDARD_CONSTANTS: &[&str] = &[$($cname,)*];
        /// Names of the standard native functions of one argument.
        pub const STANDARD_FUNCTIONS: &[&str] = &[$($fname,)*];
        /// Names of the standard native functions of two arguments.
        pub const STANDARD_FUNCTIONS2: &[&str] = &[$($gname,)*];

        /// Seeds `environment` with every standard binding, replacing
        /// existing bindings of the same names.
        pub fn install(environment: &mut Environment<'_>) {
            $(environment.define_constant($cname, $cvalue);)*
            $(environment.define_native_function($fname, $func);)*
            $(environment.define_native_function2($gname, $func2);)*
        }
    };
}

standard_bindings! {
    constants {
        "i"   => I,
        "e"   => Number::from(E),
        "pi"  => Number::from(PI),
        "π"   => Number::from(PI),
        "nan" => NAN,
    }
    functions {
        "Re"   => |x| Number::from(x.real),
        "Im"   => |x| Number::from(x.imaginary),
        "arg"  => |x| Number::from(x.arg()),
        "sin"  => Number::sin,
        "cos"  => Number::cos,
        "tan"  => Number::tan,
        "exp"  => Number::exp,
        "sqrt" => Number::sqrt,
        "log"  => Number::ln,
    }
    functions2 {
        "polar" => |magnitude, angle| Number::polar(magnitude.real, angle.real),
    }
}
