//! Convenience macros for working with group addresses.

/// Creates a [`GroupAddress`](crate::addressing::GroupAddress) from 3-level
/// notation.
///
/// # Syntax
///
/// ```text
/// ga!(main/middle/sub)
/// ```
///
/// # Examples
///
/// ```
/// use knx_gate::ga;
///
/// let addr = ga!(1/2/3);
/// assert_eq!(addr.to_string(), "1/2/3");
/// ```
///
/// # Compile-Time Validation
///
/// The macro validates address components at compile time:
///
/// ```compile_fail
/// // This will fail to compile: main group > 31
/// let addr = knx_gate::ga!(32/0/0);
/// ```
#[macro_export]
macro_rules! ga {
    ($main:literal / $middle:literal / $sub:literal) => {{
        // Compile-time validation
        const _: () = {
            if $main > 31 {
                panic!("Main group must be 0-31");
            }
            if $middle > 7 {
                panic!("Middle group must be 0-7");
            }
            if $sub > 255 {
                panic!("Sub group must be 0-255");
            }
        };

        // 5 bits main, 3 bits middle, 8 bits sub
        const RAW: u16 = (($main & 0x1F) << 11) | (($middle & 0x07) << 8) | ($sub & 0xFF);
        $crate::addressing::GroupAddress::from(RAW)
    }};
}
