//! Render — draw the whole page from one workspace snapshot.
//!
//! DESIGN
//! ======
//! Rendering is a pure function of `(&Workspace, Tab)`: leptos components are
//! rendered to a string on the server and nothing runs in the browser. All
//! three sections are drawn on every request and the inactive ones carry
//! `hidden`, so the tab bar only changes which section is visible.
//!
//! Each section is one HTML form. Its buttons pick their route with
//! `formaction`, so every action posts the section's editor fields along with
//! it and unsaved edits are never dropped. The default (first) button of each
//! form is the one Enter should trigger.
//!
//! Text and attribute values are escaped by leptos. Markdown previews go in as
//! `inner_html` from `render_markdown_html`, which drops raw HTML itself.

use leptos::prelude::*;

use crate::routes::export::{DOCUMENT_FILENAME, TABLE_FILENAME};
use crate::workspace::Workspace;
use crate::workspace::deck::Deck;
use crate::workspace::document::render_markdown_html;
use crate::workspace::grid::Table;

pub const PAGE_TITLE: &str = "NeoCel - AI Office Suite";
pub const FORMULA_FUNCTIONS: [&str; 4] = ["SUM", "AVERAGE", "VLOOKUP", "AI_PREDICT"];
pub const CHART_TYPES: [&str; 3] = ["Line", "Bar", "Pie"];

// =============================================================================
// TABS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Sheet,
    Doc,
    Slides,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Sheet, Tab::Doc, Tab::Slides];

    /// Parse the `?tab=` query value; anything unknown shows the spreadsheet.
    #[must_use]
    pub fn from_query(raw: &str) -> Self {
        match raw {
            "doc" => Self::Doc,
            "slides" => Self::Slides,
            _ => Self::Sheet,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sheet => "sheet",
            Self::Doc => "doc",
            Self::Slides => "slides",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sheet => "Spreadsheet 📊",
            Self::Doc => "Document 📝",
            Self::Slides => "Presentation 🎬",
        }
    }

    #[must_use]
    pub fn href(self) -> String {
        format!("/?tab={}", self.as_str())
    }
}

// =============================================================================
// PAGE
// =============================================================================

/// Render the full HTML page with `active` visible.
#[must_use]
pub fn render_page(workspace: &Workspace, active: Tab) -> String {
    let page = view! { <Page workspace={workspace.clone()} active=active /> };
    format!("<!DOCTYPE html>{}", page.to_html())
}

#[component]
fn Page(workspace: Workspace, active: Tab) -> impl IntoView {
    let Workspace { table, document, deck, insights, notice } = workspace;
    let text = document.text().to_owned();
    let preview = document.preview_html();

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{PAGE_TITLE}</title>
                <style inner_html=STYLE></style>
            </head>
            <body>
                <Header />
                <TabBar active=active />
                <section id="sheet" class="panel" hidden={active != Tab::Sheet}>
                    <SheetSection table=table insights=insights />
                </section>
                <section id="doc" class="panel" hidden={active != Tab::Doc}>
                    <DocSection text=text preview=preview />
                </section>
                <section id="slides" class="panel" hidden={active != Tab::Slides}>
                    <SlidesSection deck=deck notice=notice />
                </section>
            </body>
        </html>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="logo">"NC"</div>
            <div>
                <h1>"NeoCel"</h1>
                <p class="caption">"AI-Powered Office Suite: Excel + Word + PowerPoint"</p>
            </div>
        </header>
    }
}

#[component]
fn TabBar(active: Tab) -> impl IntoView {
    view! {
        <nav class="tabs">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <a class="tab" class:tab--active={tab == active} href={tab.href()}>
                            {tab.label()}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

// =============================================================================
// SPREADSHEET
// =============================================================================

#[component]
fn SheetSection(table: Table, insights: Option<String>) -> impl IntoView {
    let row_count = table.row_count().to_string();
    let col_count = table.columns().len();
    let empty_span = (col_count + 1).to_string();
    let is_empty = table.row_count() == 0;

    let headers = table
        .columns()
        .iter()
        .enumerate()
        .map(|(c, name)| {
            view! {
                <th>
                    <input type="text" name={format!("col_{c}")} value={name.clone()} />
                    <button
                        type="submit"
                        formaction="/sheet/column/delete"
                        name="col"
                        value={c.to_string()}
                        title="Delete column"
                    >
                        "×"
                    </button>
                </th>
            }
        })
        .collect_view();

    let rows = table
        .rows()
        .iter()
        .enumerate()
        .map(|(r, row)| {
            let cells = row
                .iter()
                .enumerate()
                .map(|(c, cell)| {
                    view! {
                        <td>
                            <input type="text" name={format!("cell_{r}_{c}")} value={cell.clone()} />
                        </td>
                    }
                })
                .collect_view();
            view! {
                <tr>
                    <th>
                        <button
                            type="submit"
                            formaction="/sheet/row/delete"
                            name="row"
                            value={r.to_string()}
                            title="Delete row"
                        >
                            "×"
                        </button>
                    </th>
                    {cells}
                </tr>
            }
        })
        .collect_view();

    view! {
        <h2>"📊 NeoSpread - Smart Spreadsheets"</h2>
        <form class="grid" method="post" action="/sheet">
            <input type="hidden" name="rows" value={row_count} />
            <input type="hidden" name="cols" value={col_count.to_string()} />
            <div class="row">
                <button type="submit">"Save Table"</button>
                <button type="submit" formaction="/sheet/row">"Add Row"</button>
            </div>
            <details class="expander">
                <summary>"AI Data Assistant"</summary>
                <div class="row">
                    <label class="grow">
                        "Ask for data insights:"
                        <input type="text" name="prompt" />
                    </label>
                    <button type="submit" formaction="/sheet/insights">"Generate Insights"</button>
                </div>
            </details>
            {insights.map(|text| view! { <div class="info">{text}</div> })}
            <table>
                <thead>
                    <tr>
                        <th></th>
                        {headers}
                    </tr>
                </thead>
                <tbody>
                    {rows}
                    {is_empty
                        .then(|| {
                            view! {
                                <tr>
                                    <td class="empty" colspan={empty_span}>"No rows yet"</td>
                                </tr>
                            }
                        })}
                </tbody>
            </table>
            <div class="row">
                <input type="text" name="name" placeholder="Column name" />
                <button type="submit" formaction="/sheet/column">"Add Column"</button>
            </div>
        </form>
        <AdvancedTools />
    }
}

#[component]
fn AdvancedTools() -> impl IntoView {
    view! {
        <details class="expander">
            <summary>"Advanced Tools"</summary>
            <div class="columns">
                <div>
                    <h4>"Formulas"</h4>
                    <label>
                        "Add function:"
                        <select disabled=true>{options(&FORMULA_FUNCTIONS)}</select>
                    </label>
                </div>
                <div>
                    <h4>"Charts"</h4>
                    <label>
                        "Chart type:"
                        <select disabled=true>{options(&CHART_TYPES)}</select>
                    </label>
                    <button type="button" disabled=true>"Generate Chart"</button>
                </div>
                <div>
                    <h4>"Export"</h4>
                    <a class="button" href={format!("/export/{TABLE_FILENAME}")} download=TABLE_FILENAME>
                        "Export to Excel"
                    </a>
                </div>
            </div>
        </details>
    }
}

fn options(labels: &'static [&'static str]) -> impl IntoView {
    labels.iter().map(|label| view! { <option>{*label}</option> }).collect_view()
}

// =============================================================================
// DOCUMENT
// =============================================================================

#[component]
fn DocSection(text: String, preview: String) -> impl IntoView {
    view! {
        <h2>"📝 NeoDoc - Intelligent Documents"</h2>
        <form method="post" action="/doc">
            <div class="row">
                <label class="grow">
                    "Document prompt for AI:"
                    <input type="text" name="prompt" />
                </label>
                <button type="submit" formaction="/doc/generate">"Generate Content"</button>
            </div>
            <label>
                "Document Editor:"
                <textarea name="content" rows="18" title="Supports Markdown formatting">{text}</textarea>
            </label>
            <button type="submit">"Save Document"</button>
        </form>
        <div class="preview" inner_html=preview></div>
        <details class="expander">
            <summary>"Document Tools"</summary>
            <div class="columns">
                <div>
                    <button type="button" disabled=true>"Add Table"</button>
                    <button type="button" disabled=true>"Insert Image"</button>
                </div>
                <div>
                    <a class="button" href={format!("/export/{DOCUMENT_FILENAME}")} download=DOCUMENT_FILENAME>
                        "Export to Word"
                    </a>
                </div>
            </div>
        </details>
    }
}

// =============================================================================
// PRESENTATION
// =============================================================================

#[component]
fn SlidesSection(deck: Deck, notice: Option<String>) -> impl IntoView {
    let heading = format!("Slide {}/{}", deck.position(), deck.len());
    let only_slide = deck.len() <= 1;
    let current_id = deck.current_id();
    let title = deck.current().title.clone();
    let content = deck.current().content.clone();
    let preview = render_markdown_html(&content);
    let preview_title = title.clone();

    let outline = deck
        .iter()
        .map(|(id, slide)| {
            view! {
                <li class:current={id == current_id}>
                    <button type="submit" formaction="/slides/select" name="id" value={id.to_string()}>
                        {slide.title.clone()}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <h2>"🎬 NeoSlide - Dynamic Presentations"</h2>
        <form method="post" action="/slides/current">
            <div class="row slide-nav">
                <button type="submit">"Save Slide"</button>
                <button type="submit" formaction="/slides/prev">"← Prev"</button>
                <h3 class="grow">{heading}</h3>
                <button type="submit" formaction="/slides/next">"Next →"</button>
            </div>
            <details class="expander">
                <summary>"AI Slide Creator"</summary>
                <div class="row">
                    <label class="grow">
                        "Enter slide topic:"
                        <input type="text" name="topic" />
                    </label>
                    <button type="submit" formaction="/slides/generate">"Create Slide with AI"</button>
                </div>
            </details>
            <ol class="outline">{outline}</ol>
            <label>
                "Slide Title:"
                <input type="text" name="title" value={title} />
            </label>
            <label>
                "Slide Content:"
                <textarea name="content" rows="14">{content}</textarea>
            </label>
            <div class="preview slide">
                <h2>{preview_title}</h2>
                <div inner_html=preview></div>
            </div>
            <div class="row">
                <button type="submit" formaction="/slides/new">"Add New Slide"</button>
                <button type="submit" formaction="/slides/delete" disabled=only_slide>"Delete Slide"</button>
                <button type="submit" formaction="/slides/export">"Export to PPTX"</button>
            </div>
        </form>
        {notice.map(|text| view! { <div class="success">{text}</div> })}
    }
}

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0 auto;max-width:1200px;padding:1rem 2rem;color:#1f2933}\
.header{display:flex;gap:1rem;align-items:center}\
.logo{width:80px;height:80px;border-radius:12px;background:#3b82f6;color:#fff;display:flex;align-items:center;justify-content:center;font-weight:700;font-size:1.6rem}\
.caption{color:#6b7280;margin-top:0}\
.tabs{display:flex;gap:.5rem;border-bottom:1px solid #e5e7eb;margin:1rem 0}\
.tab{padding:.5rem 1rem;text-decoration:none;color:#374151;border-bottom:2px solid transparent}\
.tab--active{border-bottom-color:#ef4444;color:#ef4444}\
.row{display:flex;gap:.5rem;align-items:end;margin:.5rem 0}\
.grow{flex:1}\
.columns{display:grid;grid-template-columns:repeat(auto-fit,minmax(200px,1fr));gap:1rem}\
label{display:flex;flex-direction:column;gap:.25rem;margin:.5rem 0}\
input[type=text],textarea{font:inherit;padding:.4rem;border:1px solid #d1d5db;border-radius:4px}\
textarea{width:100%;box-sizing:border-box;font-family:ui-monospace,monospace}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #e5e7eb;padding:2px}\
td input{width:100%;box-sizing:border-box;border:none}\
.empty{text-align:center;color:#9ca3af}\
.expander{border:1px solid #e5e7eb;border-radius:6px;padding:.5rem 1rem;margin:.75rem 0}\
.info{background:#eff6ff;border-radius:6px;padding:.75rem;white-space:pre-line}\
.success{background:#ecfdf5;border-radius:6px;padding:.75rem}\
.preview{border:1px dashed #d1d5db;border-radius:6px;padding:.5rem 1rem;margin:.75rem 0}\
.outline{display:flex;gap:.5rem;list-style:none;padding:0}\
.outline .current button{font-weight:700}\
.button{display:inline-block;padding:.4rem .8rem;border:1px solid #d1d5db;border-radius:4px;text-decoration:none;color:inherit}\
";

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
