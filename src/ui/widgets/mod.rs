// SPDX-License-Identifier: MPL-2.0
pub mod wheel_filter;

pub use wheel_filter::wheel_filter;
