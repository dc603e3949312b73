
use crate::options::ConvertOptions;

use super::Transliterator;

fn default_converter() -> Transliterator<'static> {
    Transliterator::new(ConvertOptions::default())
}
