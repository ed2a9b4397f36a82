use crate::constants::WORD_SELECTOR;
use crate::dom;
use crate::layout::{box_anchor, glyph_anchor};
use glam::Vec2;
use smallvec::SmallVec;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type Anchors = SmallVec<[Vec2; 8]>;

/// Reads one anchor per hooked heading word from live layout.
pub struct DomAnchors {
    document: web::Document,
    words: Vec<web::Element>,
}

impl DomAnchors {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let list = document
            .query_selector_all(WORD_SELECTOR)
            .map_err(|e| anyhow::anyhow!("query {}: {:?}", WORD_SELECTOR, e))?;
        let words = (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|n| n.dyn_into::<web::Element>().ok())
            .collect::<Vec<_>>();
        log::info!("[anchors] {} hooked words", words.len());
        Ok(Self {
            document: document.clone(),
            words,
        })
    }

    pub fn read(&self) -> Anchors {
        self.words.iter().map(|w| self.anchor_for(w)).collect()
    }

    fn anchor_for(&self, word: &web::Element) -> Vec2 {
        if let Some(p) = last_text_node(word).and_then(|t| self.last_glyph_anchor(&t)) {
            return p;
        }
        box_anchor(dom::rect_of(&word.get_bounding_client_rect()))
    }

    fn last_glyph_anchor(&self, text: &web::Node) -> Option<Vec2> {
        let content = text.text_content()?;
        if content.trim().is_empty() {
            return None;
        }
        // Range offsets count UTF-16 code units
        let len = content.encode_utf16().count() as u32;
        let range = self.document.create_range().ok()?;
        range.set_start(text, len.saturating_sub(1)).ok()?;
        range.set_end(text, len).ok()?;
        Some(glyph_anchor(dom::rect_of(&range.get_bounding_client_rect())))
    }
}

/// Last text node under `node` in document order.
fn last_text_node(node: &web::Node) -> Option<web::Node> {
    let mut child = node.last_child();
    while let Some(c) = child {
        if c.node_type() == web::Node::TEXT_NODE {
            return Some(c);
        }
        if let Some(t) = last_text_node(&c) {
            return Some(t);
        }
        child = c.previous_sibling();
    }
    None
}
