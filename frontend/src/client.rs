use once_cell::sync::OnceCell;

use shared::types::ClientError;

// Build-time fallbacks so a checkout runs without any environment setup.
static FALLBACK_URL: &'static str = "https://wnvkxpgwufrzjliblast.supabase.co";
static FALLBACK_KEY: &'static str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.c2FsZXMtbWFuYWdlci1hbm9u.5pZXMtZGVtby1rZXk";

pub struct Client {
    pub url: String,
    pub key: String,
}

impl Client {
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.url)
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.url)
    }

    pub fn realtime_url(&self) -> String {
        let ws = self
            .url
            .replacen("https://", "wss://", 1)
            .replacen("http://", "ws://", 1);
        format!("{ws}/realtime/v1/websocket?apikey={}&vsn=1.0.0", self.key)
    }
}

static CLIENT: OnceCell<Client> = OnceCell::new();

/// Process-wide backend handle. Environment values win over the baked-in
/// fallbacks; with neither available every caller gets `MISSING_CREDENTIALS`
/// and the shell degrades to the configuration screen.
pub fn client() -> Result<&'static Client, ClientError> {
    if let Some(client) = CLIENT.get() {
        return Ok(client);
    }
    let url = option_env!("SUPABASE_URL").unwrap_or(FALLBACK_URL);
    let key = option_env!("SUPABASE_ANON_KEY").unwrap_or(FALLBACK_KEY);
    if url.trim().is_empty() || key.trim().is_empty() {
        return Err(ClientError::MissingCredentials);
    }
    Ok(CLIENT.get_or_init(|| Client {
        url: url.trim_end_matches('/').to_string(),
        key: key.to_string(),
    }))
}
