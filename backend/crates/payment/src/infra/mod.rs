//! Infrastructure Layer - Gateway implementations

pub mod razorpay;
