use crate::dir_markup::markup_utils::{avatar_img, escape_html};
use crate::dir_member::member_model::Member;

use super::detail_model::{ClickTarget, DismissTrigger, ESCAPE_KEY};

/// Clicks inside the content panel never close the overlay.
pub fn dismisses(trigger: &DismissTrigger) -> bool {
    match trigger {
        DismissTrigger::CloseButton => true,
        DismissTrigger::OverlayClick(ClickTarget::Overlay) => true,
        DismissTrigger::OverlayClick(ClickTarget::Content) => false,
        DismissTrigger::KeyDown(key) => key == ESCAPE_KEY,
    }
}

// Forwards key presses and overlay clicks; the server decides what closes.
const DETAIL_SCRIPT: &str = r#"<script>
(function () {
  function send(event) {
    fetch('/api/events', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(event)
    }).then(function (r) {
      return r.ok ? r.json() : null;
    }).then(function (state) {
      if (state && !state.detail_visible) { window.location.assign('/'); }
    }).catch(function () {});
  }
  document.addEventListener('keydown', function (e) {
    send({ type: 'key_down', key: e.key });
  });
  var overlay = document.querySelector('.modal-overlay');
  overlay.addEventListener('click', function (e) {
    send({ type: 'overlay_click', target: e.target === e.currentTarget ? 'overlay' : 'content' });
  });
})();
</script>"#;

pub fn render_detail(member: Option<&Member>, visible: bool, avatar_fallback_url: &str) -> Option<String> {
    let member = match member {
        Some(member) if visible => member,
        _ => return None,
    };
    Some(format!(
        r#"<div class="modal-overlay">
  <div class="modal-content">
    <form method="post" action="/detail/close">
      <button type="submit" class="modal-close" aria-label="Close modal">&times;</button>
    </form>
    <div class="modal-header">
      <div class="modal-avatar">{avatar}</div>
      <div class="modal-user-info">
        <h2>{name}</h2>
        <p class="modal-role">{role}</p>
        <p class="modal-join-date">Joined: {join_date}</p>
      </div>
    </div>
    <div class="modal-body">
      <h3>About</h3>
      <p class="modal-description">{description}</p>
      <div class="modal-details">
        <div class="detail-item"><strong>Email:</strong> {email}</div>
        <div class="detail-item"><strong>Username:</strong> {username}</div>
        <div class="detail-item"><strong>Employee ID:</strong> {id}</div>
      </div>
    </div>
  </div>
</div>
{script}"#,
        avatar = avatar_img(member, avatar_fallback_url),
        name = escape_html(&member.full_name()),
        role = escape_html(&member.role),
        join_date = escape_html(&member.join_date),
        description = escape_html(&member.description),
        email = escape_html(&member.email),
        username = escape_html(&member.username),
        id = escape_html(&member.id),
        script = DETAIL_SCRIPT,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dir_member::member_utils::testing::member;

    #[test]
    fn test_dismiss_triggers() {
        assert!(dismisses(&DismissTrigger::CloseButton));
        assert!(dismisses(&DismissTrigger::OverlayClick(ClickTarget::Overlay)));
        assert!(!dismisses(&DismissTrigger::OverlayClick(ClickTarget::Content)));
        assert!(dismisses(&DismissTrigger::KeyDown("Escape".to_string())));
        assert!(!dismisses(&DismissTrigger::KeyDown("Enter".to_string())));
        assert!(!dismisses(&DismissTrigger::KeyDown("escape".to_string())));
    }

    #[test]
    fn test_renders_nothing_when_hidden_or_empty() {
        let john = member("1", "John", "Doe", "Engineer");
        assert!(render_detail(Some(&john), false, "").is_none());
        assert!(render_detail(None, true, "").is_none());
        assert!(render_detail(None, false, "").is_none());
    }

    #[test]
    fn test_renders_full_member() {
        let mut john = member("1", "John", "Doe", "Engineer");
        john.description = "x".repeat(250);
        let html = render_detail(Some(&john), true, "https://fallback.test/none.png").unwrap();

        assert!(html.contains("<h2>John Doe</h2>"));
        assert!(html.contains("Engineer"));
        assert!(html.contains("Joined: 2023-01-15"));
        assert!(html.contains("About"));
        assert!(html.contains(&"x".repeat(250)));
        assert!(html.contains("<strong>Email:</strong> john.doe@example.com"));
        assert!(html.contains("<strong>Username:</strong> johndoe"));
        assert!(html.contains("<strong>Employee ID:</strong> 1"));
        assert!(html.contains(r#"aria-label="Close modal""#));
        assert!(html.contains("https://fallback.test/none.png"));
    }

    #[test]
    fn test_event_script_ignores_failed_responses() {
        let john = member("1", "John", "Doe", "Engineer");
        let html = render_detail(Some(&john), true, "").unwrap();
        assert!(html.contains("r.ok ? r.json() : null"));
        assert!(html.contains("if (state && !state.detail_visible)"));
        assert!(html.contains(".catch(function () {})"));
    }
}
