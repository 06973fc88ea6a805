pub mod contact;
pub mod openai;
pub mod relay;
