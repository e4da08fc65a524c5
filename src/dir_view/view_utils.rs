use crate::dir_card::card_utils::render_card;
use crate::dir_detail::detail_utils::render_detail;
use crate::dir_markup::markup_utils::escape_html;
use crate::dir_member::member_model::Member;

use super::view_model::ViewState;

pub const LOADING_MESSAGE: &str = "Loading team members...";

pub fn render_spinner(message: &str) -> String {
    format!(
        r#"<div class="loading-container">
  <div class="loading-spinner"></div>
  <p class="loading-message">{}</p>
</div>"#,
        escape_html(message)
    )
}

fn render_main(view: &ViewState, avatar_fallback_url: &str) -> String {
    match view {
        ViewState::Loading => render_spinner(LOADING_MESSAGE),
        ViewState::Error(message) => format!(
            r#"<div class="error-container">
  <div class="error-message">
    <h3>Oops! Something went wrong</h3>
    <p>{}</p>
    <form method="post" action="/retry">
      <button type="submit" class="retry-button">Try Again</button>
    </form>
  </div>
</div>"#,
            escape_html(message)
        ),
        ViewState::Loaded(members) if members.is_empty() => r#"<div class="no-users">
  <h3>No team members found</h3>
  <p>There are currently no team members to display.</p>
</div>"#
            .to_string(),
        ViewState::Loaded(members) => {
            let cards: Vec<String> = members
                .iter()
                .map(|member| render_card(member, avatar_fallback_url))
                .collect();
            format!("<div class=\"users-grid\">\n{}\n</div>", cards.join("\n"))
        }
    }
}

/// Whole page as a projection of the current state.
pub fn render_page(
    view: &ViewState,
    selected: Option<&Member>,
    body_style: &str,
    avatar_fallback_url: &str,
) -> String {
    // keep polling until the fetch resolves
    let refresh = match view {
        ViewState::Loading => "\n  <meta http-equiv=\"refresh\" content=\"1\" />",
        _ => "",
    };
    let detail = render_detail(selected, selected.is_some(), avatar_fallback_url).unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Our Team</title>{refresh}
</head>
<body style="{body_style}">
  <div class="App">
    <header class="App-header">
      <h1>Our Team</h1>
      <p>Meet the amazing people who make our organization great</p>
    </header>
    <main class="App-main">
{main}
    </main>
{detail}
  </div>
</body>
</html>"#,
        refresh = refresh,
        body_style = body_style,
        main = render_main(view, avatar_fallback_url),
        detail = detail,
    )
}
