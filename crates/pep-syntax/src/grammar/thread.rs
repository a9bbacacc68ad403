//! Thread references: Discussions-To, Post-History and Resolution.
//!
//! Accepted URLs are discuss.python.org topics and Mailman 2 / Mailman 3
//! archive pages. Discussions-To may also name a mailing list address, and
//! Post-History entries may be bare dates.

use super::date::check_date;
use super::{is_alnum, is_digits, FieldBody};
use crate::diagnostic::Diagnostics;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static RE_MAILMAN_2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9_\-]+/\d{4}-[a-z]+/\d+\.html$").unwrap());

static RE_MAILMAN_3_THREAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_\-]+@python\.org/thread/[a-z0-9]+/?$").unwrap()
});

static RE_MAILMAN_3_MESSAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_\-]+@python\.org/message/[a-z0-9]+/?(#[a-z0-9]+)?$").unwrap()
});

static RE_LIST_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\w\-]+$").unwrap());

const DISCOURSE_TOPIC: &str = "https://discuss.python.org/t/";
const MAILMAN_2_ARCHIVE: &str = "https://mail.python.org/pipermail/";
const MAILMAN_3_ARCHIVE: &str = "https://mail.python.org/archives/list/";
const LIST_DOMAINS: [&str; 2] = ["@python.org", "@googlegroups.com"];

/// What a thread URL is allowed to point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadTarget {
    /// A thread or one post inside it.
    Post,
    /// The thread itself; a non-URL is left to the caller.
    Thread,
    /// A thread, post, or a single archived message.
    Message,
}

/// Whether `url` is a recognised thread URL for `target`.
pub fn is_thread_url(url: &str, target: ThreadTarget) -> bool {
    if let Some(rest) = url.strip_prefix(DISCOURSE_TOPIC) {
        let rest = rest.strip_suffix('/').unwrap_or(rest);
        let ok = match target {
            ThreadTarget::Thread => discourse_thread(rest),
            ThreadTarget::Post | ThreadTarget::Message => discourse_post(rest),
        };
        if ok {
            return true;
        }
    }
    if let Some(rest) = url.strip_prefix(MAILMAN_2_ARCHIVE) {
        if RE_MAILMAN_2.is_match(rest) {
            return true;
        }
    }
    if let Some(rest) = url.strip_prefix(MAILMAN_3_ARCHIVE) {
        if target == ThreadTarget::Message && RE_MAILMAN_3_MESSAGE.is_match(rest) {
            return true;
        }
        if RE_MAILMAN_3_THREAD.is_match(rest) {
            return true;
        }
    }
    false
}

/// A topic name: contains a non-digit and is alphanumeric apart from `-`/`_`.
fn topic_name(name: &str) -> bool {
    let name = name.replace(['-', '_'], "0");
    !is_digits(&name) && is_alnum(&name)
}

/// `[topic-name/]topic-id`
fn discourse_thread(rest: &str) -> bool {
    match rest.rsplit_once('/') {
        None => is_digits(rest),
        Some((name, id)) => topic_name(name) && is_digits(id),
    }
}

/// `topic-name/topic-id[/post-id]`, `topic-id/post-id` or `topic-id`
fn discourse_post(rest: &str) -> bool {
    let parts: Vec<&str> = rest.split('/').collect();
    match parts.as_slice() {
        [id] => is_digits(id),
        [left, right] => (topic_name(left) || is_digits(left)) && is_digits(right),
        [name, id, post] => topic_name(name) && is_digits(id) && is_digits(post),
        _ => false,
    }
}

fn check_thread(
    line: usize,
    url: &str,
    prefix: &str,
    target: ThreadTarget,
    diags: &mut Diagnostics,
) {
    if !url.starts_with("https://") && target == ThreadTarget::Thread {
        return;
    }
    if !is_thread_url(url, target) {
        diags.push(line, format!("{} must be a valid thread URL", prefix));
    }
}

pub fn check_discussions_to(line: usize, value: &str, diags: &mut Diagnostics) {
    check_thread(line, value, "Discussions-To", ThreadTarget::Thread, diags);
    if value.starts_with("https://") {
        return;
    }
    for domain in LIST_DOMAINS {
        if let Some(list) = value.strip_suffix(domain) {
            if !RE_LIST_NAME.is_match(list) {
                diags.push(line, "Discussions-To must be a valid mailing list");
            }
            return;
        }
    }
    diags.push(
        line,
        "Discussions-To must be a valid thread URL or mailing list",
    );
}

pub fn check_resolution(line: usize, value: &str, diags: &mut Diagnostics) {
    check_thread(line, value, "Resolution", ThreadTarget::Message, diags);
}

/// One Post-History entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostEntry<'a> {
    /// `DD-mmm-YYYY`
    Date(&'a str),
    /// `` `DD-mmm-YYYY <URL>`__ ``
    Linked { date: &'a str, url: &'a str },
    /// Starts with a backtick or ends with `>`__`, but not both.
    HalfLinked,
}

impl<'a> PostEntry<'a> {
    pub fn parse(post: &'a str) -> Self {
        let opens = post.starts_with('`');
        let closes = post.ends_with(">`__");
        match (opens, closes) {
            (false, false) => PostEntry::Date(post),
            (true, true) => {
                let inner = &post[1..post.len() - 4];
                match inner.split_once(" <") {
                    Some((date, url)) => PostEntry::Linked { date, url },
                    None => PostEntry::Linked { date: inner, url: "" },
                }
            }
            _ => PostEntry::HalfLinked,
        }
    }
}

pub fn check_post_history(body: &FieldBody, today: NaiveDate, diags: &mut Diagnostics) {
    if body.text().is_empty() {
        return;
    }
    for (line, text) in body.lines() {
        let text = text.strip_suffix(',').unwrap_or(text).trim();
        for post in text.split(", ") {
            match PostEntry::parse(post) {
                PostEntry::Date(date) => check_date(line, date, "Post-History", today, diags),
                PostEntry::Linked { date, url } => {
                    check_date(line, date, "Post-History", today, diags);
                    check_thread(line, url, "Post-History", ThreadTarget::Post, diags);
                }
                PostEntry::HalfLinked => diags.push(
                    line,
                    "post line must be a date or both start with “`” and end with “>`__”",
                ),
            }
        }
    }
}
