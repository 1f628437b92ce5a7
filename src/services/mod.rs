pub mod gemini;
pub mod restaurant;
