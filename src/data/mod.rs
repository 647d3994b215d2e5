pub mod epicycles;
pub mod harmonics;
pub mod spline;
pub mod trace;
