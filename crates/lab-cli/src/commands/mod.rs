pub mod dispatch;
pub mod draft;
pub mod embeds;
pub mod labs;
pub mod shared;
pub mod versions;
