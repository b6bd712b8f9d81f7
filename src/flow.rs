// SPDX-License-Identifier: Unlicense

//! Assert, raise and propagate errors through the error slot.
//!
//! Every macro takes the tracer first: an owned [`Tracer`](crate::Tracer),
//! a `&mut Tracer`, anything implementing [`Trace`](crate::Trace), or
//! [`Global`](crate::Global). Failure is an early `return` of
//! `Err(Fault)`, converted with `From` so functions may return their own
//! error type. Forms taking `else value` return `value` instead, for
//! functions without a `Result`.
//!
//! ```ignore
//! fn get_user_int(t: &mut Tracer<Uart>, line: &str) -> Result<i32> {
//!     ensure!(t, !line.is_empty(), ErrorCode::INPUT, "nothing typed");
//!     match line.parse() {
//!         Ok(value) => Ok(value),
//!         Err(_) => raise!(t, ErrorCode::TYPE, "{:x?}", line.as_bytes()),
//!     }
//! }
//!
//! fn print_user_int(t: &mut Tracer<Uart>, line: &str) {
//!     let value = match get_user_int(t, line) {
//!         Ok(value) => value,
//!         Err(_) => {
//!             log_err!(t);
//!             clear_log!(t);
//!             return;
//!         }
//!     };
//!     info!(t, "{}", value);
//! }
//! ```

/// Fail with `ASSERT`, or the given code and message, unless `cond` holds.
#[macro_export]
macro_rules! ensure {
    ($t:expr, $cond:expr, else $ret:expr) => {
        if !$cond {
            #[allow(unused_imports)]
            use $crate::debug::tracer::Trace as _;
            let _ = ($t).raise($crate::errno::ErrorCode::ASSERT, file!(), line!(), None);
            return $ret;
        }
    };
    ($t:expr, $cond:expr) => {
        if !$cond {
            $crate::raise!($t, $crate::errno::ErrorCode::ASSERT);
        }
    };
    ($t:expr, $cond:expr, $code:expr) => {
        if !$cond {
            $crate::raise!($t, $code);
        }
    };
    ($t:expr, $cond:expr, $code:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::raise!($t, $code, $($arg)+);
        }
    };
}

/// Set and report `code`, then fail.
#[macro_export]
macro_rules! raise {
    ($t:expr, $code:expr) => ({
        #[allow(unused_imports)]
        use $crate::debug::tracer::Trace as _;
        let fault = ($t).raise($code, file!(), line!(), None);
        return ::core::result::Result::Err(::core::convert::From::from(fault));
    });
    ($t:expr, $code:expr, $msg:literal) => ({
        #[allow(unused_imports)]
        use $crate::debug::tracer::Trace as _;
        let fault = ($t).raise_message($code, $msg, file!(), line!());
        return ::core::result::Result::Err(::core::convert::From::from(fault));
    });
    ($t:expr, $code:expr, $($arg:tt)+) => ({
        #[allow(unused_imports)]
        use $crate::debug::tracer::Trace as _;
        let fault = ($t).raise($code, file!(), line!(), Some(format_args!($($arg)+)));
        return ::core::result::Result::Err(::core::convert::From::from(fault));
    });
}

/// Fail quietly if the error slot holds an error, or unwrap a result
/// without reporting.
#[macro_export]
macro_rules! propagate {
    ($t:expr, else $ret:expr) => ({
        #[allow(unused_imports)]
        use $crate::debug::tracer::Trace as _;
        if ($t).has_error() {
            return $ret;
        }
    });
    ($t:expr, $res:expr) => (
        match $res {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(fault) => {
                let fault: $crate::util::result::Fault = fault;
                return ::core::result::Result::Err(::core::convert::From::from(fault.propagated()));
            }
        }
    );
    ($t:expr) => ({
        #[allow(unused_imports)]
        use $crate::debug::tracer::Trace as _;
        if let ::core::result::Result::Err(fault) = ($t).check(file!(), line!(), false) {
            return ::core::result::Result::Err(::core::convert::From::from(fault));
        }
    });
}

/// Report and fail if the error slot holds an error, or unwrap a result,
/// reporting on the way out if it failed.
#[macro_export]
macro_rules! propagate_log {
    ($t:expr, else $ret:expr) => ({
        #[allow(unused_imports)]
        use $crate::debug::tracer::Trace as _;
        if ($t).check(file!(), line!(), true).is_err() {
            return $ret;
        }
    });
    ($t:expr, $res:expr) => (
        match $res {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(fault) => {
                $crate::log_err!($t);
                let fault: $crate::util::result::Fault = fault;
                return ::core::result::Result::Err(::core::convert::From::from(fault.propagated()));
            }
        }
    );
    ($t:expr) => ({
        #[allow(unused_imports)]
        use $crate::debug::tracer::Trace as _;
        if let ::core::result::Result::Err(fault) = ($t).check(file!(), line!(), true) {
            return ::core::result::Result::Err(::core::convert::From::from(fault));
        }
    });
}

/// Report an explicit recovery point and clear the error slot.
#[macro_export]
macro_rules! clear_log {
    ($t:expr) => ({
        #[allow(unused_imports)]
        use $crate::debug::tracer::Trace as _;
        ($t).clear_and_log(file!(), line!())
    });
}
