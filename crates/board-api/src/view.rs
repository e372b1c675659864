use board_types::models::Discussion;

use crate::paths::author_path;

const STYLE: &str = "
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
article { border: 1px solid #ccc; border-radius: 4px; padding: 0.5rem 1rem; margin-bottom: 1rem; }
.meta { color: #666; font-size: 0.9rem; }
.content { white-space: pre-wrap; }
form { margin: 0.5rem 0; }
textarea { width: 100%; }
";

/// Render the board page for `discussions` as seen by `author`.
pub fn render_board(discussions: &[Discussion], author: Option<&str>) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Discussion Board</title>\n<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n");

    match author {
        Some(email) => {
            html.push_str(&format!("<body data-author=\"{}\">\n", escape(email)));
            html.push_str("<h1>Discussion Board</h1>\n");
            html.push_str(&format!(
                "<p class=\"author\">Posting as <strong>{}</strong></p>\n",
                escape(email)
            ));
            push_compose_form(&mut html, email);
        }
        None => {
            html.push_str("<body>\n<h1>Discussion Board</h1>\n");
            html.push_str(
                "<p class=\"author\">No author selected. Open \
                 <code>/discussions/&lt;email&gt;</code> to choose one.</p>\n",
            );
        }
    }

    html.push_str("<section id=\"discussions\">\n");
    if discussions.is_empty() {
        html.push_str("<p class=\"empty\">No discussions yet.</p>\n");
    }
    for discussion in discussions {
        push_discussion(&mut html, discussion, author);
    }
    html.push_str("</section>\n</body>\n</html>\n");

    html
}

fn push_compose_form(html: &mut String, email: &str) {
    html.push_str(&format!(
        "<form class=\"compose\" method=\"post\" action=\"{}\">\n\
         <input name=\"title\" placeholder=\"Title\" required>\n\
         <textarea name=\"content\" rows=\"4\" placeholder=\"What's on your mind?\" required></textarea>\n\
         <button type=\"submit\">Post</button>\n\
         </form>\n",
        escape(&author_path(email, &["post"]))
    ));
}

fn push_discussion(html: &mut String, d: &Discussion, author: Option<&str>) {
    html.push_str(&format!(
        "<article class=\"discussion\" id=\"discussion-{id}\">\n\
         <h2>#{id} {title}</h2>\n\
         <p class=\"meta\">{email} &middot; <time datetime=\"{iso}\">{shown}</time></p>\n\
         <p class=\"content\">{content}</p>\n",
        id = d.id,
        title = escape(&d.title),
        email = escape(&d.author_email),
        iso = d.created_at.to_rfc3339(),
        shown = d.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
        content = escape(&d.content),
    ));

    // Mutation forms post under the viewer's path, so they need a selection.
    if let Some(email) = author {
        html.push_str(&format!(
            "<form method=\"post\" action=\"{action}\">\n\
             <input type=\"hidden\" name=\"discussion_id\" value=\"{id}\">\n\
             <button type=\"submit\">Delete</button>\n\
             </form>\n",
            action = escape(&author_path(email, &["request_delete"])),
            id = d.id,
        ));
        html.push_str(&format!(
            "<form method=\"post\" action=\"{action}\">\n\
             <input type=\"hidden\" name=\"discussion_id\" value=\"{id}\">\n\
             <input name=\"new_title\" value=\"{title}\" required>\n\
             <textarea name=\"new_content\" rows=\"3\" required>{content}</textarea>\n\
             <button type=\"submit\">Save</button>\n\
             </form>\n",
            action = escape(&author_path(email, &["request_edit"])),
            id = d.id,
            title = escape(&d.title),
            content = escape(&d.content),
        ));
    }

    html.push_str("</article>\n");
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn discussion(id: i64, title: &str) -> Discussion {
        Discussion {
            id,
            title: title.to_string(),
            content: "body".to_string(),
            author_email: "a@x.com".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn lists_every_discussion() {
        let page = render_board(&[discussion(1, "First"), discussion(2, "Second")], None);

        assert!(page.contains("id=\"discussion-1\""));
        assert!(page.contains("#2 Second"));
        assert!(page.contains("2024-05-01 12:30:00 UTC"));
        assert!(page.contains("a@x.com"));
    }

    #[test]
    fn selected_author_gets_forms() {
        let page = render_board(&[discussion(1, "First")], Some("bob@x.com"));

        assert!(page.contains("data-author=\"bob@x.com\""));
        assert!(page.contains("action=\"/discussions/bob@x.com/post\""));
        assert!(page.contains("action=\"/discussions/bob@x.com/request_delete\""));
        assert!(page.contains("action=\"/discussions/bob@x.com/request_edit\""));
    }

    #[test]
    fn no_author_means_no_forms() {
        let page = render_board(&[discussion(1, "First")], None);

        assert!(!page.contains("<form"));
        assert!(page.contains("No author selected"));
    }

    #[test]
    fn empty_board_says_so() {
        assert!(render_board(&[], None).contains("No discussions yet."));
    }

    #[test]
    fn user_text_is_escaped() {
        let page = render_board(&[discussion(1, "<script>alert('x')</script>")], None);

        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }
}
