pub mod detect;
pub mod normalize;
