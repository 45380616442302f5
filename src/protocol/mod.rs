//! Protocol Module
//!
//! Transport-independent commands and replies, plus the JSON shapes used
//! to render them.
//!
//! ### Commands
//! - GET    - key
//! - SET    - key + value
//! - DELETE - key
//! - LIST   - page coordinates
//! - SEARCH - keyword + page coordinates
//!
//! ### Page Result JSON
//! ```text
//! {"items":[{"key":"..","value":".."}],"page":1,"page_size":10,"total":0}
//! ```

mod command;
mod response;

pub use command::{Command, CommandType, Reply};
pub use response::{EntryBody, PageBody};
