use crate::dir_member::member_model::Member;

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Same avatar policy for cards and the detail overlay: swap to the fallback
/// image once if the member's own image fails to load.
pub fn avatar_img(member: &Member, fallback_url: &str) -> String {
    format!(
        r#"<img src="{src}" alt="{alt}" onerror="this.onerror=null;this.src={fallback};" />"#,
        src = escape_html(&member.avatar),
        alt = escape_html(&member.full_name()),
        fallback = escape_html(&js_string(fallback_url)),
    )
}

/// Quoted JavaScript string literal for inline handlers.
pub fn js_string(input: &str) -> String {
    serde_json::Value::from(input).to_string()
}

pub fn view_more_path(member_id: &str) -> String {
    format!("/members/{}/view", urlencoding::encode(member_id))
}
