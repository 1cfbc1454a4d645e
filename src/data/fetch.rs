use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use reqwest::header::{ETAG, IF_MODIFIED_SINCE, IF_NONE_MATCH, LAST_MODIFIED, USER_AGENT};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Cached HTTP text fetch
// ---------------------------------------------------------------------------
// The dataset is fetched once per session; the on-disk cache makes the
// fetch conditional (ETag / Last-Modified) and keeps the app usable
// offline once the CSV has been seen.

const CACHE_VERSION: u32 = 1;
const CACHE_DIR: &str = "craque-scout";
const CACHE_FILE: &str = "http_cache.json";
const REQUEST_TIMEOUT_SECS: u64 = 10;

static CLIENT: OnceCell<Client> = OnceCell::new();

/// Shared blocking client, built on first use.
pub fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")
    })
}

static CACHE: Mutex<Option<CacheFile>> = Mutex::new(None);

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct CacheFile {
    version: u32,
    entries: HashMap<String, CacheEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    body: String,
    etag: Option<String>,
    last_modified: Option<String>,
    fetched_at: u64,
}

/// Fetch a text body over HTTP, revalidating a cached copy when the
/// server supports conditional requests. A network failure falls back
/// to the cached body when one exists.
pub fn fetch_text_cached(client: &Client, url: &str) -> Result<String> {
    let cached = cached_entry(url);

    let mut request = client
        .get(url)
        .header(USER_AGENT, concat!("craque-scout/", env!("CARGO_PKG_VERSION")));
    if let Some(entry) = cached.as_ref() {
        if let Some(etag) = entry.etag.as_ref() {
            request = request.header(IF_NONE_MATCH, etag);
        }
        if let Some(last_modified) = entry.last_modified.as_ref() {
            request = request.header(IF_MODIFIED_SINCE, last_modified);
        }
    }

    let response = match request.send() {
        Ok(response) => response,
        Err(err) => {
            if let Some(entry) = cached {
                log::warn!("request to {url} failed ({err}); serving cached body");
                return Ok(entry.body);
            }
            return Err(err).context("request failed");
        }
    };

    let status = response.status();
    let headers = response.headers().clone();
    if status == StatusCode::NOT_MODIFIED {
        if let Some(mut entry) = cached {
            entry.fetched_at = unix_seconds();
            store_entry(url, entry.clone());
            return Ok(entry.body);
        }
        anyhow::bail!("received 304 without a cached body");
    }

    let body = response.text().context("failed reading response body")?;
    if !status.is_success() {
        anyhow::bail!("http {status}: {body}");
    }

    let entry = CacheEntry {
        body: body.clone(),
        etag: header_value(&headers, ETAG),
        last_modified: header_value(&headers, LAST_MODIFIED),
        fetched_at: unix_seconds(),
    };
    store_entry(url, entry);
    Ok(body)
}

fn header_value(headers: &reqwest::header::HeaderMap, name: reqwest::header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

fn cached_entry(url: &str) -> Option<CacheEntry> {
    let mut guard = CACHE.lock().expect("http cache lock poisoned");
    guard
        .get_or_insert_with(load_cache_file)
        .entries
        .get(url)
        .cloned()
}

fn store_entry(key: &str, entry: CacheEntry) {
    let mut guard = CACHE.lock().expect("http cache lock poisoned");
    let cache = guard.get_or_insert_with(load_cache_file);
    cache.version = CACHE_VERSION;
    cache.entries.insert(key.to_string(), entry);
    if let Err(err) = save_cache_file(cache) {
        log::warn!("failed to persist http cache: {err:#}");
    }
}

fn load_cache_file() -> CacheFile {
    let cache = cache_path()
        .and_then(|path| fs::read_to_string(path).ok())
        .and_then(|raw| serde_json::from_str::<CacheFile>(&raw).ok())
        .unwrap_or_default();
    // A version bump invalidates the whole file.
    if cache.version == CACHE_VERSION {
        cache
    } else {
        CacheFile::default()
    }
}

fn save_cache_file(cache: &CacheFile) -> Result<()> {
    let Some(path) = cache_path() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    // Write-then-rename so an interrupted save cannot truncate the cache.
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, serde_json::to_string(cache)?).context("writing http cache")?;
    fs::rename(&tmp, &path).context("replacing http cache")?;
    Ok(())
}

fn cache_path() -> Option<PathBuf> {
    let base = match std::env::var("XDG_CACHE_HOME") {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => {
            let home = std::env::var("HOME").ok().filter(|h| !h.trim().is_empty())?;
            PathBuf::from(home).join(".cache")
        }
    };
    Some(base.join(CACHE_DIR).join(CACHE_FILE))
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
