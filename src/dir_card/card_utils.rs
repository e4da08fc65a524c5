use crate::dir_markup::markup_utils::{avatar_img, escape_html, view_more_path};
use crate::dir_member::member_model::Member;

pub const DESCRIPTION_LIMIT: usize = 100;
const ELLIPSIS: &str = "...";

/// Counts characters, not bytes.
pub fn truncate_description(description: &str) -> String {
    match description.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => format!("{}{}", &description[..cut], ELLIPSIS),
        None => description.to_string(),
    }
}

/// Summary tile for one member. The "View More" form is the select action.
pub fn render_card(member: &Member, avatar_fallback_url: &str) -> String {
    format!(
        r#"<div class="user-card">
  <div class="user-avatar">{avatar}</div>
  <h3 class="user-name">{name}</h3>
  <p class="user-role">{role}</p>
  <p class="user-description">{description}</p>
  <form method="post" action="{action}">
    <button type="submit" class="view-more-btn">View More</button>
  </form>
</div>"#,
        avatar = avatar_img(member, avatar_fallback_url),
        name = escape_html(&member.full_name()),
        role = escape_html(&member.role),
        description = escape_html(&truncate_description(&member.description)),
        action = view_more_path(&member.id),
    )
}
