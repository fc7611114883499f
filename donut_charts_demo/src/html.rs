// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-page HTML report of SVG snapshots.

use crate::svg::escape_xml;

#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: &'static str,
    pub(crate) description: String,
    pub(crate) svg: String,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_xml(title)));
    out.push_str(
        "<style>body{font-family:sans-serif;margin:24px;background:#f4f4f6}\
         section{background:#fff;margin:0 0 24px;padding:16px;border-radius:4px}\
         p{color:#555}</style>\n",
    );
    out.push_str("</head><body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_xml(title)));
    for section in sections {
        out.push_str("<section>\n");
        out.push_str(&format!("<h2>{}</h2>\n", escape_xml(section.title)));
        out.push_str(&format!("<p>{}</p>\n", escape_xml(&section.description)));
        out.push_str(&section.svg);
        out.push_str("</section>\n");
    }
    out.push_str("</body></html>\n");
    out
}
