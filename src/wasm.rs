//! WebAssembly bindings.
//!
//! `FolioSearch` is the browser-side handle: fetch the corpus JSON once,
//! `build()` it, then call `search()` on every keystroke.
//!
//! ```js
//! const search = new FolioSearch({ threshold: 0.3 });
//! search.build(await (await fetch("/api/search")).json());
//! const hits = search.search("rust", 10);
//! ```

use crate::corpus::load_corpus;
use crate::options::SearchOptions;
use crate::searcher::Searcher;
use crate::types::{Document, SearchResult};
use js_sys::Array;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct FolioSearch {
    searcher: Searcher,
}

#[wasm_bindgen]
impl FolioSearch {
    /// Create an unbuilt search handle.
    ///
    /// `options` is a partial `SearchOptions` object (camelCase keys); omit it
    /// or pass `undefined` for the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<FolioSearch, JsValue> {
        let options: SearchOptions = if options.is_undefined() || options.is_null() {
            SearchOptions::default()
        } else {
            from_value(options).map_err(|e| e.to_string())?
        };
        let searcher = Searcher::new(options).map_err(|e| e.to_string())?;
        Ok(FolioSearch { searcher })
    }

    /// Index an array of document records. Drafts are dropped.
    #[wasm_bindgen]
    pub fn build(&self, corpus: JsValue) -> Result<(), JsValue> {
        let docs: Vec<Document> = from_value(corpus).map_err(|e| e.to_string())?;
        let corpus = load_corpus(&docs).map_err(|e| e.to_string())?;
        self.searcher.rebuild(corpus);
        Ok(())
    }

    #[wasm_bindgen(js_name = isReady)]
    pub fn is_ready(&self) -> bool {
        self.searcher.is_ready()
    }

    /// Ranked results. A missing, zero, or negative `limit` uses the default.
    #[wasm_bindgen]
    pub fn search(&self, query: &str, limit: Option<i32>) -> Result<JsValue, JsValue> {
        let limit = limit.map_or(0, |l| usize::try_from(l).unwrap_or(0));
        results_to_js(&self.searcher.search(query, limit))
    }

    #[wasm_bindgen]
    pub fn suggestions(&self, query: &str) -> Result<JsValue, JsValue> {
        results_to_js(&self.searcher.suggestions(query))
    }

    #[wasm_bindgen]
    pub fn tags(&self) -> Array {
        self.searcher.searchable_tags().into_iter().map(JsValue::from).collect()
    }

    #[wasm_bindgen]
    pub fn categories(&self) -> Array {
        self.searcher
            .searchable_categories()
            .into_iter()
            .map(JsValue::from)
            .collect()
    }

    /// Drop the index. Searches return `[]` until the next `build()`.
    #[wasm_bindgen]
    pub fn reset(&self) {
        self.searcher.reset();
    }
}

fn results_to_js(results: &[SearchResult]) -> Result<JsValue, JsValue> {
    to_value(results).map_err(|e| JsValue::from_str(&e.to_string()))
}
