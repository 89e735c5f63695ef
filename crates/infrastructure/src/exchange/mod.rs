mod dto;
mod mapper;
mod reader;

pub use dto::{ExchangeDocument, ExchangeDto, QuestionDto, RecordDto, SrvTargetDto};
pub use reader::ExchangeReader;
