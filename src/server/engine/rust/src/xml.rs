/* src/server/engine/rust/src/xml.rs */

use std::fmt::Write;

use quick_xml::escape::escape;

use crate::record::PathRecord;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>"#;

/// Child sitemap file name for a 1-based page.
pub fn child_sitemap_name(page: usize) -> String {
  format!("sitemap{page}.xml")
}

/// `urlset` document for `records`, each `<loc>` prefixed with `origin`.
pub fn render_urlset(origin: &str, records: &[PathRecord]) -> String {
  let mut xml = String::with_capacity(128 + records.len() * 96);
  xml.push_str(XML_DECL);
  let _ = write!(xml, "\n<urlset xmlns=\"{SITEMAP_NS}\" xmlns:xhtml=\"{XHTML_NS}\">");
  for record in records {
    push_url(&mut xml, origin, record);
  }
  xml.push_str("\n</urlset>");
  xml
}

fn push_url(xml: &mut String, origin: &str, record: &PathRecord) {
  xml.push_str("\n  <url>");
  let _ = write!(xml, "\n    <loc>{}</loc>", escape(&format!("{origin}{}", record.path)));
  if let Some(lastmod) = &record.lastmod {
    let _ = write!(xml, "\n    <lastmod>{}</lastmod>", escape(lastmod.as_str()));
  }
  if let Some(changefreq) = record.changefreq {
    let _ = write!(xml, "\n    <changefreq>{changefreq}</changefreq>");
  }
  if let Some(priority) = record.priority {
    let _ = write!(xml, "\n    <priority>{priority}</priority>");
  }
  for alt in record.alternates.iter().flatten() {
    let _ = write!(
      xml,
      "\n    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\" />",
      escape(alt.lang.as_str()),
      escape(&format!("{origin}{}", alt.path)),
    );
  }
  xml.push_str("\n  </url>");
}

/// `sitemapindex` document listing `sitemap1.xml` through `sitemap{total}.xml`.
pub fn render_index(origin: &str, total: usize) -> String {
  let mut xml = String::with_capacity(128 + total * 80);
  xml.push_str(XML_DECL);
  let _ = write!(xml, "\n<sitemapindex xmlns=\"{SITEMAP_NS}\">");
  for page in 1..=total {
    let _ = write!(
      xml,
      "\n  <sitemap>\n    <loc>{}/{}</loc>\n  </sitemap>",
      escape(origin),
      child_sitemap_name(page)
    );
  }
  xml.push_str("\n</sitemapindex>");
  xml
}
