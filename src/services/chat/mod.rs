mod service;
mod types;


pub use service::ChatService;
pub use types::{
    ChatCompletionChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
    ChatMessageRole, Usage,
};
