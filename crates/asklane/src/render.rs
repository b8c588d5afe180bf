//! Plain-text rendering of views.
//!
//! Markdown bodies are printed as written. Relative times are computed
//! against the `now` passed in so output is reproducible under test.

use std::fmt::Write;

use asklane_core::text::{format_date, format_long_date, group_thousands, time_ago};
use asklane_core::{
    Acknowledgement, AnswerView, AskPage, CommentView, EntityKind, HomePage, NavItem,
    NotFoundPage, ProfilePage, QuestionPage, QuestionSummary, Tag, TagsPage, Timestamp, User,
    View,
};

const RULE: &str = "----------------------------------------";

/// Render any page.
pub fn view(view: &View, now: Timestamp) -> String {
    match view {
        View::Home(page) => home(page, now),
        View::QuestionDetail(page) => question(page, now),
        View::AskQuestion(page) => ask(page),
        View::Tags(page) => tags(page),
        View::UserProfile(page) => profile(page),
        View::NotFound(page) => not_found(page),
    }
}

fn byline(author: &Option<User>) -> String {
    match author {
        Some(user) => format!("{} ({} reputation)", user.name, group_thousands(user.reputation.into())),
        None => "unknown user".to_string(),
    }
}

fn author_name(author: &Option<User>) -> &str {
    author.as_ref().map_or("unknown user", |u| u.name.as_str())
}

fn tag_list(tags: &[Tag]) -> String {
    tags.iter()
        .map(|t| format!("[{}]", t.name))
        .collect::<Vec<_>>()
        .join(" ")
}

fn plural(n: impl Into<u64>, one: &str, many: &str) -> String {
    let n = n.into();
    if n == 1 {
        format!("1 {one}")
    } else {
        format!("{} {many}", group_thousands(n))
    }
}

fn summary_block(out: &mut String, q: &QuestionSummary, now: Timestamp) {
    let answers = plural(q.answer_count as u64, "answer", "answers");
    let accepted = if q.has_accepted_answer { " (accepted)" } else { "" };
    let _ = writeln!(
        out,
        "{} votes | {}{} | {}",
        q.score,
        answers,
        accepted,
        plural(q.view_count, "view", "views")
    );
    let _ = writeln!(out, "{}  /questions/{}", q.title, q.id);
    let preview = q.excerpt.split_whitespace().collect::<Vec<_>>().join(" ");
    let _ = writeln!(out, "  {}", preview);
    if !q.tags.is_empty() {
        let _ = writeln!(out, "  {}", tag_list(&q.tags));
    }
    let _ = writeln!(
        out,
        "  asked {} ago by {}",
        time_ago(q.created_at, now),
        author_name(&q.author)
    );
}

fn home(page: &HomePage, now: Timestamp) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "All Questions");
    let _ = writeln!(
        out,
        "{} (sorted by {})",
        plural(page.questions.len() as u64, "question", "questions"),
        page.sort
    );
    for q in &page.questions {
        let _ = writeln!(out, "{RULE}");
        summary_block(&mut out, q, now);
    }
    out
}

fn comment_block(out: &mut String, comments: &[CommentView], indent: &str, now: Timestamp) {
    if comments.is_empty() {
        return;
    }
    let _ = writeln!(out, "{indent}Comments");
    for c in comments {
        let _ = writeln!(
            out,
            "{indent}  [{}] {} - {} {} ago",
            c.upvotes,
            c.content,
            author_name(&c.author),
            time_ago(c.created_at, now)
        );
    }
}

fn answer_block(out: &mut String, a: &AnswerView, now: Timestamp) {
    let _ = writeln!(out, "{RULE}");
    let marker = if a.is_accepted { "  [accepted]" } else { "" };
    let _ = writeln!(out, "{} votes{}", a.score, marker);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", a.content);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "answered {} ago by {}",
        time_ago(a.created_at, now),
        byline(&a.author)
    );
    comment_block(out, &a.comments, "  ", now);
}

fn question(page: &QuestionPage, now: Timestamp) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", page.title);
    let _ = writeln!(
        out,
        "Asked {} ago | Viewed {} times",
        time_ago(page.created_at, now),
        group_thousands(page.view_count)
    );
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{} votes", page.score);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", page.content);
    let _ = writeln!(out);
    if !page.tags.is_empty() {
        let _ = writeln!(out, "{}", tag_list(&page.tags));
    }
    let _ = writeln!(
        out,
        "asked {} ago by {}",
        time_ago(page.created_at, now),
        byline(&page.author)
    );
    comment_block(&mut out, &page.comments, "", now);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", plural(page.answer_count() as u64, "Answer", "Answers"));
    for a in &page.answers {
        answer_block(&mut out, a, now);
    }
    out
}

fn ask(page: &AskPage) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Ask a public question");
    let _ = writeln!(out, "Get help from thousands of developers ready to help.");
    let _ = writeln!(out);
    let _ = writeln!(out, "Writing a good question");
    let _ = writeln!(out, "  - Summarize your problem in a one-line title");
    let _ = writeln!(out, "  - Describe your problem in more detail");
    let _ = writeln!(out, "  - Describe what you've tried");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Add up to {} tags to describe what your question is about. Available tags:",
        page.max_tags
    );
    let _ = writeln!(out, "  {}", tag_list(&page.available_tags));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Submit with: asklane ask --title <TITLE> --body <BODY> --tag <NAME>..."
    );
    out
}

/// Tag lines shared by the tag browser and suggestions.
pub fn tag_lines(tags: &[Tag]) -> String {
    let mut out = String::new();
    for tag in tags {
        let _ = writeln!(
            out,
            "{:<12} {}",
            tag.name,
            plural(tag.count, "question", "questions")
        );
        if let Some(description) = &tag.description {
            let _ = writeln!(out, "  {}", description);
        }
    }
    out
}

fn tags(page: &TagsPage) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Tags");
    if page.query.is_empty() {
        let _ = writeln!(out, "sorted by {}", page.sort);
    } else {
        let _ = writeln!(out, "matching \"{}\", sorted by {}", page.query, page.sort);
    }
    let _ = writeln!(out, "{RULE}");
    if page.tags.is_empty() {
        let _ = writeln!(out, "No tags found matching your search criteria.");
    } else {
        out.push_str(&tag_lines(&page.tags));
    }
    out
}

fn profile(page: &ProfilePage) -> String {
    let user = &page.user;
    let mut out = String::new();
    let you = if page.is_current_user { " (you)" } else { "" };
    let _ = writeln!(out, "{}{}", user.name, you);
    let _ = writeln!(out, "Member since {}", format_long_date(user.joined_at));
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Reputation  {}", group_thousands(user.reputation.into()));
    let _ = writeln!(out, "Questions   {}", page.question_count);
    let _ = writeln!(out, "Answers     {}", page.answer_count);
    let _ = writeln!(out, "Votes       {}", page.votes_received);
    let _ = writeln!(out, "Email       {}", user.email);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "{}",
        plural(page.question_count as u64, "Question", "Questions")
    );
    if page.questions.is_empty() {
        let _ = writeln!(out, "This user hasn't asked any questions yet.");
    }
    for q in &page.questions {
        let _ = writeln!(
            out,
            "  {:>4}  {}  ({})",
            q.score,
            q.title,
            format_date(q.created_at)
        );
    }
    out
}

fn not_found(page: &NotFoundPage) -> String {
    let mut out = String::new();
    match page.kind {
        Some(EntityKind::Question) => {
            let _ = writeln!(out, "Question Not Found");
            let _ = writeln!(
                out,
                "The question you're looking for doesn't exist or has been removed."
            );
        }
        Some(EntityKind::User) => {
            let _ = writeln!(out, "User Not Found");
            let _ = writeln!(
                out,
                "The user you're looking for doesn't exist or has been removed."
            );
        }
        _ => {
            let _ = writeln!(out, "404 Page Not Found");
            let _ = writeln!(
                out,
                "We couldn't find the page you're looking for. It might have been removed, renamed, or it never existed in the first place."
            );
        }
    }
    let _ = writeln!(out, "  path: {}", page.path);
    let _ = writeln!(out, "Go to Home Page: /    Ask a Question: /questions/ask");
    out
}

/// A signed-in user summary.
pub fn user(user: &User) -> String {
    format!(
        "{} <{}>\nid {} | {} reputation | member since {}\n",
        user.name,
        user.email,
        user.id,
        group_thousands(user.reputation.into()),
        format_long_date(user.joined_at)
    )
}

/// Acknowledgement of a discarded submission.
pub fn acknowledgement(ack: &Acknowledgement) -> String {
    format!("{}\n", ack.message)
}

/// Route table and sidebar.
pub fn routes(patterns: &[(&str, &str)], navigation: &[NavItem]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Routes");
    for (pattern, page) in patterns {
        let _ = writeln!(out, "  {:<16} {}", pattern, page);
    }
    let _ = writeln!(out, "Navigation");
    for item in navigation {
        let _ = writeln!(out, "  {:<16} {}", item.label, item.path);
    }
    out
}
