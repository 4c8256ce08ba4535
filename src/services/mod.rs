//! 服务层模块

mod examples;
mod translator;

pub use examples::ExamplePromptService;
pub use translator::SuggestionTranslator;
