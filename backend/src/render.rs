//! Server-rendered HTML pages.
//!
//! Markup is built in code; every value coming from the catalog goes through
//! [`escape`].

use std::collections::BTreeMap;

use axum::http::StatusCode;
use tourbook_core::domain::Artist;
use tourbook_core::services::ArtistProjection;

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
  let mut out = String::with_capacity(raw.len());
  for c in raw.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(c),
    }
  }
  out
}

fn layout(title: &str, body: &str) -> String {
  format!(
    "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
     <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
     <title>{title}</title>\n<link rel=\"stylesheet\" href=\"/static/style.css\">\n</head>\n\
     <body>\n<nav><a href=\"/search\">Artists</a></nav>\n<main>\n{body}</main>\n</body>\n</html>\n",
    title = escape(title),
  )
}

fn list(items: &[String]) -> String {
  if items.is_empty() {
    return "<p class=\"empty\">Nothing listed.</p>\n".to_string();
  }

  let mut out = String::from("<ul>\n");
  for item in items {
    out.push_str(&format!("<li>{}</li>\n", escape(item)));
  }
  out.push_str("</ul>\n");
  out
}

/// Artist list, used by the search page.
pub fn artists_page(query: &str, artists: &[Artist]) -> String {
  let mut body = format!(
    "<h1>Artists</h1>\n<form action=\"/search\" method=\"get\"><input type=\"search\" name=\"query\" \
     value=\"{}\" placeholder=\"Search artists\"><button type=\"submit\">Search</button></form>\n",
    escape(query)
  );

  if artists.is_empty() {
    body.push_str(&format!("<p class=\"empty\">No artists match &quot;{}&quot;.</p>\n", escape(query)));
  } else {
    body.push_str("<ul class=\"artists\">\n");
    for artist in artists {
      let id = artist.id;
      body.push_str(&format!(
        "<li><strong>{name}</strong> ({year}) \
         <a href=\"/artist/locations/{id}\">locations</a> \
         <a href=\"/artist/dates/{id}\">dates</a> \
         <a href=\"/artist/relations/{id}\">relations</a></li>\n",
        name = escape(&artist.name),
        year = artist.creation_date,
      ));
    }
    body.push_str("</ul>\n");
  }

  layout("Artists", &body)
}

pub fn locations_page(projection: &ArtistProjection<Vec<String>>) -> String {
  let title = format!("{} - Locations", projection.name);
  let body = format!("<h1>{}</h1>\n<h2>Locations</h2>\n{}", escape(&projection.name), list(&projection.payload));
  layout(&title, &body)
}

pub fn dates_page(projection: &ArtistProjection<Vec<String>>) -> String {
  let title = format!("{} - Dates", projection.name);
  let body = format!("<h1>{}</h1>\n<h2>Concert dates</h2>\n{}", escape(&projection.name), list(&projection.payload));
  layout(&title, &body)
}

pub fn relations_page(projection: &ArtistProjection<BTreeMap<String, Vec<String>>>) -> String {
  let mut body = format!("<h1>{}</h1>\n<h2>Concerts</h2>\n", escape(&projection.name));

  if projection.payload.is_empty() {
    body.push_str("<p class=\"empty\">Nothing listed.</p>\n");
  } else {
    body.push_str("<dl>\n");
    for (location, dates) in &projection.payload {
      body.push_str(&format!("<dt>{}</dt>\n", escape(location)));
      for date in dates {
        body.push_str(&format!("<dd>{}</dd>\n", escape(date)));
      }
    }
    body.push_str("</dl>\n");
  }

  layout(&format!("{} - Relations", projection.name), &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
  let body = format!(
    "<h1>{}</h1>\n<p class=\"error\">{}</p>\n",
    status.as_u16(),
    escape(message)
  );
  layout("Error", &body)
}

#[cfg(test)]
mod tests {
  use tourbook_core::domain::ArtistId;

  use super::*;

  #[test]
  fn escapes_markup_characters() {
    assert_eq!(escape("<b>\"Tom\" & 'Jerry'</b>"), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
  }

  #[test]
  fn artist_list_links_every_artist() {
    let html = artists_page("qu", &[Artist::new(1, "Queen")]);

    assert!(html.contains("<strong>Queen</strong>"));
    assert!(html.contains("href=\"/artist/locations/1\""));
    assert!(html.contains("value=\"qu\""));
  }

  #[test]
  fn empty_results_echo_the_escaped_query() {
    let html = artists_page("<script>", &[]);

    assert!(html.contains("No artists match &quot;&lt;script&gt;&quot;"));
    assert!(!html.contains("<script>"));
  }

  #[test]
  fn relations_render_locations_with_their_dates() {
    let mut payload = BTreeMap::new();
    payload.insert("paris-france".to_string(), vec!["01-02-2020".to_string()]);
    let projection = ArtistProjection { id: ArtistId::new(1), name: "Queen".into(), payload };

    let html = relations_page(&projection);

    assert!(html.contains("<title>Queen - Relations</title>"));
    assert!(html.contains("<dt>paris-france</dt>\n<dd>01-02-2020</dd>"));
  }

  #[test]
  fn lists_render_one_escaped_item_per_line() {
    assert_eq!(list(&["Paris".into(), "A&B".into()]), "<ul>\n<li>Paris</li>\n<li>A&amp;B</li>\n</ul>\n");
    assert_eq!(list(&[]), "<p class=\"empty\">Nothing listed.</p>\n");
  }

  #[test]
  fn error_page_shows_status_and_message() {
    let html = error_page(StatusCode::NOT_FOUND, "Artist not found");

    assert!(html.contains("<h1>404</h1>"));
    assert!(html.contains("Artist not found"));
  }
}
