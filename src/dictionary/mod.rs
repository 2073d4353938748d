/*!
 * Term dictionary support.
 *
 * - **Model**: validated dictionary categories and entries
 * - **Cache**: dictionary sources and a time-bounded cache
 * - **Processor**: term substitution and output punctuation repair
 */

pub mod cache;
pub mod model;
pub mod processor;

pub use cache::{DictionaryCache, DictionarySource, FileDictionarySource, StaticDictionarySource};
pub use model::{Dictionary, DictionaryCategory, DictionaryEntry};
pub use processor::{apply_dictionary, post_process};
