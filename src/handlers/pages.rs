use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Local;
use tracing::{error, warn};

use crate::{models::UserProfile, upstream::current_session, AppState};

/// `GET /dashboard`. Three terminal outcomes: no session redirects to the
/// login page, a failed profile fetch renders the generic error view, and
/// the happy path renders the page. No stage retries.
pub async fn dashboard(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let session = match current_session(&state.api, &headers).await {
        Ok(Some(session)) => session,
        Ok(None) => return Redirect::to("/login").into_response(),
        Err(cause) => {
            warn!("session validation unavailable: {cause}");
            return Redirect::to("/login").into_response();
        }
    };

    match state.api.fetch_profile(&session.user_id).await {
        Ok(profile) => Html(render_dashboard(&profile)).into_response(),
        Err(cause) => {
            error!("profile fetch failed: {cause}");
            Html(ERROR_PAGE.to_string()).into_response()
        }
    }
}

/// `GET /login`. Redirect target for anonymous dashboard visits.
pub async fn login_page() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}

fn render_dashboard(profile: &UserProfile) -> String {
    let last_login = profile
        .last_login
        .with_timezone(&Local)
        .format("%b %-d, %Y, %-I:%M %p");
    let rendered_at = Local::now().format("%A, %B %-d, %Y at %-I:%M:%S %p");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Dashboard</title></head>
<body>
  <main class="dashboard">
    <header class="profile">
      <h1>Welcome back, {name}!</h1>
      <p>Last login: {last_login}</p>
      <p>Role: <span>{role}</span></p>
      <p>Email: <span>{email}</span></p>
    </header>
    <section class="stats">
      <div class="stat"><strong>{posts}</strong><span>Posts</span></div>
      <div class="stat"><strong>{followers}</strong><span>Followers</span></div>
      <div class="stat"><strong>{following}</strong><span>Following</span></div>
    </section>
    <footer>Page rendered on server at: {rendered_at}</footer>
  </main>
</body>
</html>
"#,
        name = profile.name,
        role = profile.role,
        email = profile.email,
        posts = profile.stats.posts,
        followers = profile.stats.followers,
        following = profile.stats.following,
    )
}

const ERROR_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Dashboard</title></head>
<body>
  <main class="error">
    <h1>Error loading dashboard</h1>
    <p>Please try refreshing the page</p>
  </main>
</body>
</html>
"#;

const LOGIN_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Sign in</title></head>
<body>
  <main class="login">
    <h1>Sign in</h1>
    <form id="login-form">
      <input type="email" name="email" placeholder="Email" required>
      <input type="password" name="password" placeholder="Password" required>
      <button type="submit">Sign in</button>
    </form>
    <p id="login-error" hidden>Invalid credentials</p>
  </main>
  <script>
    document.getElementById('login-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const form = new FormData(event.target);
      const response = await fetch('/api/auth/login', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(Object.fromEntries(form)),
      });
      if (response.ok) {
        const body = await response.json();
        window.location.assign(body.redirectTo);
      } else {
        document.getElementById('login-error').hidden = false;
      }
    });
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, UserStats};
    use chrono::Utc;

    #[test]
    fn dashboard_markup_carries_profile_fields() {
        let profile = UserProfile {
            id: "user-123".to_string(),
            name: "Yusuf King".to_string(),
            email: "yking@example.com".to_string(),
            last_login: Utc::now() - chrono::Duration::hours(1),
            role: Role::Admin,
            stats: UserStats {
                posts: 42,
                followers: 1234,
                following: 567,
            },
        };

        let html = render_dashboard(&profile);
        assert!(html.contains("Welcome back, Yusuf King!"));
        assert!(html.contains("Last login: "));
        assert!(html.contains("<span>admin</span>"));
        assert!(html.contains("<strong>42</strong>"));
        assert!(html.contains("<strong>1234</strong>"));
        assert!(html.contains("<strong>567</strong>"));
    }
}
