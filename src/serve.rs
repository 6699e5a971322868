//! Development server.
//!
//! Renders every request from the in-memory content, so the URL state
//! (search text, selected tag) and the contact form work as they would on a
//! live site. Built on `tiny_http`:
//!
//! - Pages resolved through [`Route::resolve`] and rendered on demand
//! - `POST /contact` runs the simulated submission
//! - Stylesheet, feed and sitemap generated per request
//! - Graceful shutdown on Ctrl+C
//!
//! Requests are handled one at a time on the main thread.

use crate::{
    config::SiteConfig,
    content::ContentStore,
    generator::{rss::rss_xml, sitemap::sitemap_xml},
    log,
    pages::{Page, STYLESHEET, STYLESHEET_PATH, Site},
    router::{Route, parse_query, split_url},
    state::{ContactFields, ContactForm},
    utils::minify::{MinifyType, minify},
};
use anyhow::{Context, Result, anyhow};
use std::{
    io::Read,
    net::{IpAddr, SocketAddr},
    path::Path,
    sync::Arc,
    thread,
    time::Duration,
};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

/// Try binding to port, retry with incremented port if in use
const MAX_PORT_RETRIES: u16 = 10;

/// Largest accepted form body.
const MAX_BODY_BYTES: u64 = 64 * 1024;

/// Status for a contact form with a blank required field.
const UNPROCESSABLE: u16 = 422;

// ============================================================================
// Server Entry Point
// ============================================================================

/// Start the development server.
///
/// Binds to the configured interface and port (with auto-retry on port
/// conflict), installs a Ctrl+C handler, then serves until interrupted.
pub fn serve_site(store: &ContentStore, config: &SiteConfig) -> Result<()> {
    let site = Site::new(store, config)?;
    let interface: IpAddr = config
        .serve
        .interface
        .parse()
        .with_context(|| format!("Invalid interface `{}`", config.serve.interface))?;

    let (server, addr) = try_bind_port(interface, config.serve.port, MAX_PORT_RETRIES)?;
    let server = Arc::new(server);

    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    log!("serve"; "http://{}", addr);

    // Blocks until Ctrl+C
    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &site) {
            log!("serve"; "request error: {e}");
        }
    }

    Ok(())
}

/// Try to bind to a port, retrying with incremented port numbers if in use.
fn try_bind_port(interface: IpAddr, base_port: u16, max_retries: u16) -> Result<(Server, SocketAddr)> {
    let mut last_error = None;

    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(e) => last_error = Some(e),
        }
    }

    Err(anyhow!(
        "Failed to bind after {} attempts (ports {}-{}): {}",
        max_retries,
        base_port,
        base_port.saturating_add(max_retries.saturating_sub(1)),
        last_error.map(|e| e.to_string()).unwrap_or_default()
    ))
}

// ============================================================================
// Request Handling
// ============================================================================

/// A response before it is handed to `tiny_http`.
#[derive(Debug)]
struct Reply {
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
}

impl Reply {
    fn html(page: Page, site: &Site) -> Self {
        let status = page.status;
        let html = page.into_string();
        Self {
            status,
            content_type: guess_content_type(Path::new("index.html")),
            body: minify(MinifyType::Html(html.as_bytes()), site.config).into_owned(),
        }
    }

    fn asset(path: &str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            content_type: guess_content_type(Path::new(path)),
            body: body.into(),
        }
    }

    fn text(status: u16, message: &str) -> Self {
        Self {
            status,
            content_type: guess_content_type(Path::new("message.txt")),
            body: message.as_bytes().to_vec(),
        }
    }
}

fn handle_request(mut request: Request, site: &Site) -> Result<()> {
    let method = request.method().clone();
    let url = request.url().to_owned();

    let mut body = String::new();
    if method == Method::Post {
        request
            .as_reader()
            .take(MAX_BODY_BYTES)
            .read_to_string(&mut body)
            .context("Failed to read request body")?;
    }

    let reply = respond(site, &method, &url, &body);
    let response = Response::from_data(reply.body)
        .with_status_code(StatusCode(reply.status))
        .with_header(content_type_header(reply.content_type)?);

    request.respond(response)?;
    Ok(())
}

/// Route one request to a reply.
fn respond(site: &Site, method: &Method, url: &str, body: &str) -> Reply {
    let (path, query) = split_url(url);

    match method {
        Method::Get | Method::Head => {}
        Method::Post if path.trim_end_matches('/') == "/contact" => {
            return Reply::html(submit_contact(site, body), site);
        }
        _ => return Reply::text(405, "405 Method Not Allowed"),
    }

    let config = site.config;
    let feed_path = format!("/{}", config.build.rss.path.display());
    let sitemap_path = format!("/{}", config.build.sitemap.path.display());

    if path == STYLESHEET_PATH {
        Reply::asset(path, STYLESHEET)
    } else if path == feed_path {
        match rss_xml(site.store, config) {
            Ok(xml) => Reply::asset(path, minify(MinifyType::Xml(xml.as_bytes()), config)),
            Err(e) => {
                log!("error"; "{e}");
                Reply::text(500, "500 Internal Server Error")
            }
        }
    } else if path == sitemap_path {
        let xml = sitemap_xml(site.store, config);
        Reply::asset(path, minify(MinifyType::Xml(xml.as_bytes()), config))
    } else {
        Reply::html(site.render(&Route::resolve(site.store, path, query)), site)
    }
}

/// Run the simulated submission for a posted form body.
///
/// Nothing is sent: a complete form waits `contact.delay_ms` and reports
/// success, a form with a blank field is shown again with its values.
/// The `Submitting` state only lasts for the sleep, so it is never sent.
fn submit_contact(site: &Site, body: &str) -> Page {
    let fields = ContactFields::from_pairs(&parse_query(body));
    let mut form = ContactForm::default();

    if let Err(err) = form.submit(fields) {
        let mut page = site.render_contact(&form, Some(&err));
        page.status = UNPROCESSABLE;
        return page;
    }

    thread::sleep(Duration::from_millis(site.config.contact.delay_ms));

    match form.complete() {
        Ok(()) => {
            log!("contact"; "message from {} <{}>", form.fields().name, form.fields().email);
            site.render_contact(&form, None)
        }
        Err(err) => site.render_contact(&form, Some(&err)),
    }
}

// ============================================================================
// Response Helpers
// ============================================================================

fn content_type_header(value: &str) -> Result<Header> {
    Header::from_bytes("Content-Type", value).map_err(|()| anyhow!("invalid header value `{value}`"))
}

/// Guess MIME content type from file extension.
///
/// Returns `application/octet-stream` for unknown extensions.
fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("xml") => "application/xml; charset=utf-8",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (ContentStore, SiteConfig) {
        let mut config = SiteConfig::default();
        config.base.url = Some("http://127.0.0.1:5277".into());
        config.contact.delay_ms = 0;
        (ContentStore::builtin().unwrap(), config)
    }

    fn body_text(reply: &Reply) -> String {
        String::from_utf8_lossy(&reply.body).into_owned()
    }

    #[test]
    fn test_get_pages() {
        let (store, config) = fixture();
        let site = Site::new(&store, &config).unwrap();

        let home = respond(&site, &Method::Get, "/", "");
        assert_eq!(home.status, 200);
        assert_eq!(home.content_type, "text/html; charset=utf-8");

        let search = respond(&site, &Method::Get, "/blog?q=react+query", "");
        assert!(body_text(&search).contains("/blog/performance-optimization-react-query"));

        assert_eq!(respond(&site, &Method::Get, "/blog/nope", "").status, 404);
        assert_eq!(respond(&site, &Method::Get, "/nope", "").status, 404);
    }

    #[test]
    fn test_assets() {
        let (store, config) = fixture();
        let site = Site::new(&store, &config).unwrap();

        let css = respond(&site, &Method::Get, "/assets/site.css", "");
        assert_eq!(css.content_type, "text/css; charset=utf-8");
        assert_eq!(css.body, STYLESHEET.as_bytes());

        let feed = respond(&site, &Method::Get, "/feed.xml", "");
        assert_eq!(feed.status, 200);
        assert!(body_text(&feed).contains("http://127.0.0.1:5277/blog/"));

        let sitemap = respond(&site, &Method::Get, "/sitemap.xml", "");
        assert_eq!(sitemap.content_type, "application/xml; charset=utf-8");
        assert!(body_text(&sitemap).contains("<loc>http://127.0.0.1:5277/about</loc>"));
    }

    #[test]
    fn test_contact_submission() {
        let (store, config) = fixture();
        let site = Site::new(&store, &config).unwrap();

        let body = "name=Ada&email=ada%40example.com&subject=Hi&message=Let%27s+talk";
        let reply = respond(&site, &Method::Post, "/contact", body);
        assert_eq!(reply.status, 200);
        let html = body_text(&reply);
        assert!(html.contains("Message sent!"));
        assert!(html.contains("Send Another Message"));
    }

    #[test]
    fn test_contact_missing_field() {
        let (store, config) = fixture();
        let site = Site::new(&store, &config).unwrap();

        let reply = respond(&site, &Method::Post, "/contact", "name=Ada&email=&subject=Hi&message=x");
        assert_eq!(reply.status, UNPROCESSABLE);
        let html = body_text(&reply);
        assert!(html.contains("required field `email` is empty"));
        assert!(html.contains(r#"value="Ada""#));
    }

    #[test]
    fn test_method_not_allowed() {
        let (store, config) = fixture();
        let site = Site::new(&store, &config).unwrap();

        assert_eq!(respond(&site, &Method::Post, "/blog", "").status, 405);
        assert_eq!(respond(&site, &Method::Delete, "/contact", "").status, 405);
    }

    #[test]
    fn test_guess_content_type() {
        assert_eq!(guess_content_type(Path::new("a.css")), "text/css; charset=utf-8");
        assert_eq!(guess_content_type(Path::new("feed.xml")), "application/xml; charset=utf-8");
        assert_eq!(guess_content_type(Path::new("blob")), "application/octet-stream");
    }
}
