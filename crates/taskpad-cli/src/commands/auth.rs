use anyhow::anyhow;
use taskpad_api_models::Credentials;
use taskpad_client::{Session, TaskApi};

use crate::cli::CredentialArgs;
use crate::client::{AppContext, CliError, CliResult};
use crate::session_store;

pub(crate) async fn handle_signup(ctx: &AppContext, args: CredentialArgs) -> CliResult<()> {
    let credentials = read_credentials(args)?;
    ctx.api.signup(&credentials).await?;
    println!("Signup successful! Run `taskpad login` to start a session.");
    Ok(())
}

pub(crate) async fn handle_login(ctx: &AppContext, args: CredentialArgs) -> CliResult<()> {
    let credentials = read_credentials(args)?;
    let response = ctx.api.login(&credentials).await?;
    let mut session = Session::new();
    session.login(response.token);
    if !session.is_authenticated() {
        return Err(CliError::failure(anyhow!("server returned an empty token")));
    }
    session_store::save(&ctx.session_file, &session)?;
    tracing::info!(path = %ctx.session_file.display(), "session stored");
    println!("Logged in as {}", credentials.username);
    Ok(())
}

pub(crate) fn handle_logout(ctx: &AppContext) -> CliResult<()> {
    session_store::clear(&ctx.session_file)?;
    println!("Logged out");
    Ok(())
}

fn read_credentials(args: CredentialArgs) -> CliResult<Credentials> {
    let username = args.username.trim().to_string();
    if username.is_empty() {
        return Err(CliError::validation("username must not be empty"));
    }
    let password = match args.password {
        Some(password) => password,
        None => rpassword::prompt_password("Password: ")
            .map_err(|err| CliError::failure(anyhow!("failed to read password: {err}")))?,
    };
    if password.is_empty() {
        return Err(CliError::validation("password must not be empty"));
    }
    Ok(Credentials::new(username, password))
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::path::Path;
    use taskpad_client::{ClientConfig, HttpClient};

    fn context(server: &MockServer, session_file: &Path) -> AppContext {
        let config = ClientConfig::new(&server.base_url()).expect("valid URL");
        AppContext {
            api: HttpClient::new(&config).expect("client"),
            session: Session::new(),
            session_file: session_file.to_path_buf(),
        }
    }

    fn credentials(username: &str, password: &str) -> CredentialArgs {
        CredentialArgs {
            username: username.to_string(),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn login_persists_token_and_logout_clears_it() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/login")
                .json_body(json!({"username": "ada", "password": "pw"}));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"token": "tok-42"}));
        });
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        let ctx = context(&server, &path);

        handle_login(&ctx, credentials("ada", "pw"))
            .await
            .expect("login should succeed");
        mock.assert();
        let stored = session_store::load(&path).expect("stored session");
        assert_eq!(stored.token(), Some("tok-42"));

        handle_logout(&ctx).expect("logout should succeed");
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn rejected_login_leaves_no_session() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/login");
            then.status(401)
                .header("content-type", "application/json")
                .json_body(json!({"error": "Invalid username or password"}));
        });
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        let ctx = context(&server, &path);

        let err = handle_login(&ctx, credentials("ada", "bad"))
            .await
            .expect_err("login should fail");
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("Invalid username or password"));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn signup_conflict_is_a_validation_error() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/signup")
                .json_body(json!({"username": "ada", "password": "pw"}));
            then.status(409)
                .header("content-type", "application/json")
                .json_body(json!({"error": "Username already exists"}));
        });
        let dir = tempfile::tempdir().expect("tempdir");
        let ctx = context(&server, &dir.path().join("session.json"));

        let err = handle_signup(&ctx, credentials(" ada ", "pw"))
            .await
            .expect_err("signup should fail");
        mock.assert();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Username already exists");
    }

    #[tokio::test]
    async fn blank_credentials_never_reach_the_server() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = ClientConfig::new("http://127.0.0.1:9").expect("valid URL");
        let ctx = AppContext {
            api: HttpClient::new(&config).expect("client"),
            session: Session::new(),
            session_file: dir.path().join("session.json"),
        };

        let err = handle_signup(&ctx, credentials("   ", "pw"))
            .await
            .expect_err("blank username");
        assert_eq!(err.exit_code(), 2);
        let err = handle_login(&ctx, credentials("ada", ""))
            .await
            .expect_err("blank password");
        assert_eq!(err.exit_code(), 2);
    }
}
