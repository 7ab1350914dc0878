#![doc = include_str!("../README.md")]

extern crate alloc;

mod body_extractor;
mod config;
mod data_source;
mod error;
mod http_client;
mod item_card;
mod list_renderer;
mod markup_parser;
mod node;
mod page_composer;
mod record;
mod render;
mod slot_replacer;
mod template_loader;
mod transform;

pub use self::{
    body_extractor::extract_body,
    config::*,
    data_source::{DataSource, FetchError, HttpDataSource},
    error::Error,
    http_client::{HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient},
    item_card::render_card,
    list_renderer::{DisplayUnit, render_list},
    markup_parser::parse_markup,
    node::{Element, Node},
    page_composer::PageComposer,
    record::{Record, RecordId},
    render::{RenderFormat, RenderOptions, render_page},
    slot_replacer::SlotReplacer,
    template_loader::{LoadError, load_template},
    transform::{Replacer, transform},
};
