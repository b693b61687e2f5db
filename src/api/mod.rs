use crate::models::{ListItem, Title};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Network,
    Http,
    Parse,
}

#[derive(Clone, Debug)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn http(status: reqwest::StatusCode, body: String, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{ctx} ({status}): {body}"),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        let default_api_url = "http://localhost:3000".to_string();

        // We support BOTH `window.ENV.API_URL` (the spelling deployments set)
        // and `window.ENV.api_url` (legacy/implementation detail) for
        // compatibility.
        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    // 1) Prefer the deployed spelling: API_URL
                    if let Ok(api_url) = js_sys::Reflect::get(&env, &"API_URL".into()) {
                        if let Some(url_str) = api_url.as_string() {
                            return Self { api_url: url_str };
                        }
                    }

                    // 2) Fallback: api_url
                    if let Ok(api_url) = js_sys::Reflect::get(&env, &"api_url".into()) {
                        if let Some(url_str) = api_url.as_string() {
                            return Self { api_url: url_str };
                        }
                    }
                }
            }
        }

        Self {
            api_url: default_api_url,
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct CheckAccountRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct CheckAccountResponse {
    /// `true` when the username/password pair exists.
    #[serde(default)]
    pub exit: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct TitlesResponse {
    pub titles: Vec<Title>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct ListsResponse {
    pub lists: Vec<ListItem>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct AddTodoRequest {
    pub username: String,
    pub title: String,
    /// Item descriptions for the new title, blanks already filtered out.
    pub list_desc: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct AddTodoResponse {
    #[serde(default)]
    pub success: bool,

    // Backend camelCases this one field.
    #[serde(rename = "newTitleId", default)]
    pub new_title_id: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct UpdateTitleRequest {
    pub title_id: i64,
    pub title: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct DeleteTodoRequest {
    pub title_id: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct UpdateStatusRequest {
    pub title_id: i64,
    pub list_id: i64,
    pub status: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct AddListRequest {
    pub title_id: i64,
    pub list_desc: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct AddListResponse {
    pub list_id: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct UpdateListRequest {
    pub list_id: i64,
    pub list_desc: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct DeleteListRequest {
    pub list_id: i64,
}

#[derive(Clone)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn from_env() -> Self {
        Self::new(EnvConfig::new().api_url)
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let client = reqwest::Client::new();
        let res = client
            .get(self.endpoint_url(path))
            .send()
            .await
            .map_err(ApiError::network)?;

        if res.status().is_success() {
            res.json().await.map_err(ApiError::parse)
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, body, "Request failed"))
        }
    }

    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &impl serde::Serialize,
    ) -> ApiResult<T> {
        let client = reqwest::Client::new();
        let res = client
            .post(self.endpoint_url(path))
            .json(body)
            .send()
            .await
            .map_err(ApiError::network)?;

        if res.status().is_success() {
            res.json().await.map_err(ApiError::parse)
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, body, "Request failed"))
        }
    }

    /// POST where only the HTTP status matters. Ack bodies vary across
    /// endpoints ({"success": true}, {"message": ...}), so drain and ignore.
    async fn post_ack(&self, path: &str, body: &impl serde::Serialize) -> ApiResult<()> {
        let client = reqwest::Client::new();
        let res = client
            .post(self.endpoint_url(path))
            .json(body)
            .send()
            .await
            .map_err(ApiError::network)?;

        if res.status().is_success() {
            let _ = res.text().await;
            Ok(())
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, body, "Request failed"))
        }
    }

    pub async fn check_account(&self, username: &str, password: &str) -> ApiResult<bool> {
        let res: CheckAccountResponse = self
            .post_json(
                "/check-accounts",
                &CheckAccountRequest {
                    username: username.to_string(),
                    password: password.to_string(),
                },
            )
            .await?;
        Ok(res.exit)
    }

    pub async fn get_titles(&self) -> ApiResult<Vec<Title>> {
        let res: TitlesResponse = self.get_json("/get-titles").await?;
        Ok(res.titles)
    }

    pub async fn get_lists(&self, title_id: i64) -> ApiResult<Vec<ListItem>> {
        let res: ListsResponse = self.get_json(&format!("/get-lists/{}", title_id)).await?;
        Ok(res.lists)
    }

    pub async fn add_todo(
        &self,
        username: &str,
        title: &str,
        list_desc: Vec<String>,
    ) -> ApiResult<AddTodoResponse> {
        self.post_json(
            "/add-todo",
            &AddTodoRequest {
                username: username.to_string(),
                title: title.to_string(),
                list_desc,
            },
        )
        .await
    }

    pub async fn update_title(&self, title_id: i64, title: &str) -> ApiResult<()> {
        self.post_ack(
            "/update-title",
            &UpdateTitleRequest {
                title_id,
                title: title.to_string(),
            },
        )
        .await
    }

    pub async fn delete_todo(&self, title_id: i64) -> ApiResult<()> {
        self.post_ack("/delete-todo", &DeleteTodoRequest { title_id })
            .await
    }

    /// Checking is one-way; there is no uncheck, so `status` is always true.
    pub async fn update_status(&self, title_id: i64, list_id: i64) -> ApiResult<()> {
        self.post_ack(
            "/update-status",
            &UpdateStatusRequest {
                title_id,
                list_id,
                status: true,
            },
        )
        .await
    }

    pub async fn add_list(&self, title_id: i64, list_desc: &str) -> ApiResult<i64> {
        let res: AddListResponse = self
            .post_json(
                "/add-list",
                &AddListRequest {
                    title_id,
                    list_desc: list_desc.to_string(),
                },
            )
            .await?;
        Ok(res.list_id)
    }

    pub async fn update_list(&self, list_id: i64, list_desc: &str) -> ApiResult<()> {
        self.post_ack(
            "/update-list",
            &UpdateListRequest {
                list_id,
                list_desc: list_desc.to_string(),
            },
        )
        .await
    }

    pub async fn delete_list(&self, list_id: i64) -> ApiResult<()> {
        self.post_ack("/delete-list", &DeleteListRequest { list_id })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors_tag_kind() {
        let parse = ApiError::parse("unexpected token");
        assert_eq!(parse.kind, ApiErrorKind::Parse);
        assert_eq!(parse.to_string(), "unexpected token");

        let http = ApiError::http(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            "boom".to_string(),
            "Request failed",
        );
        assert_eq!(http.kind, ApiErrorKind::Http);
        assert!(http.to_string().contains("500"));
        assert!(http.to_string().contains("boom"));
    }

    #[test]
    fn test_check_account_request_serialization() {
        let req = CheckAccountRequest {
            username: "u".to_string(),
            password: "pass".to_string(),
        };
        let v = serde_json::to_value(req).expect("should serialize");
        assert_eq!(v["username"], "u");
        assert_eq!(v["password"], "pass");
    }

    #[test]
    fn test_check_account_response_contract_deserialize() {
        let parsed: CheckAccountResponse =
            serde_json::from_str(r#"{"exit": true}"#).expect("response should parse");
        assert!(parsed.exit);

        // Backends that omit the flag mean "no such account".
        let parsed: CheckAccountResponse =
            serde_json::from_str("{}").expect("empty response should parse");
        assert!(!parsed.exit);
    }

    #[test]
    fn test_titles_response_contract_deserialize() {
        let json = r#"{"titles": [{"id": 1, "title": "Chores"}, {"id": 2, "title": "Errands"}]}"#;
        let parsed: TitlesResponse = serde_json::from_str(json).expect("titles should parse");
        assert_eq!(parsed.titles.len(), 2);
        assert_eq!(parsed.titles[0].id, 1);
        assert_eq!(parsed.titles[0].title, "Chores");
    }

    #[test]
    fn test_lists_response_contract_deserialize() {
        let json = r#"{"lists": [{"id": 10, "list_desc": "Sweep", "status": false}]}"#;
        let parsed: ListsResponse = serde_json::from_str(json).expect("lists should parse");
        assert_eq!(parsed.lists.len(), 1);
        assert_eq!(parsed.lists[0].id, Some(10));
        assert_eq!(parsed.lists[0].list_desc, "Sweep");
        assert!(!parsed.lists[0].status);
    }

    #[test]
    fn test_list_item_status_defaults_to_unchecked() {
        let json = r#"{"lists": [{"id": 11, "list_desc": "Mop"}]}"#;
        let parsed: ListsResponse = serde_json::from_str(json).expect("lists should parse");
        assert!(!parsed.lists[0].status);
    }

    #[test]
    fn test_add_todo_request_serialization() {
        let req = AddTodoRequest {
            username: "u".to_string(),
            title: "Groceries".to_string(),
            list_desc: vec!["Milk".to_string(), "Eggs".to_string()],
        };
        let v = serde_json::to_value(req).expect("should serialize");
        assert_eq!(v["username"], "u");
        assert_eq!(v["title"], "Groceries");
        assert_eq!(v["list_desc"], serde_json::json!(["Milk", "Eggs"]));
    }

    #[test]
    fn test_add_todo_response_contract_deserialize() {
        let parsed: AddTodoResponse =
            serde_json::from_str(r#"{"success": true, "newTitleId": 42}"#)
                .expect("response should parse");
        assert!(parsed.success);
        assert_eq!(parsed.new_title_id, 42);
    }

    #[test]
    fn test_add_todo_response_tolerates_failure_shape() {
        // Failure responses carry no newTitleId.
        let parsed: AddTodoResponse =
            serde_json::from_str(r#"{"success": false}"#).expect("response should parse");
        assert!(!parsed.success);
    }

    #[test]
    fn test_update_title_request_serialization() {
        let req = UpdateTitleRequest {
            title_id: 3,
            title: "Weekend chores".to_string(),
        };
        let v = serde_json::to_value(req).expect("should serialize");
        assert_eq!(v["title_id"], 3);
        assert_eq!(v["title"], "Weekend chores");
    }

    #[test]
    fn test_delete_todo_request_serialization() {
        let req = DeleteTodoRequest { title_id: 4 };
        let v = serde_json::to_value(req).expect("should serialize");
        assert_eq!(v["title_id"], 4);
    }

    #[test]
    fn test_update_status_request_serialization() {
        let req = UpdateStatusRequest {
            title_id: 1,
            list_id: 10,
            status: true,
        };
        let v = serde_json::to_value(req).expect("should serialize");
        assert_eq!(v["title_id"], 1);
        assert_eq!(v["list_id"], 10);
        assert_eq!(v["status"], true);
    }

    #[test]
    fn test_add_list_request_serialization() {
        let req = AddListRequest {
            title_id: 5,
            list_desc: "Water plants".to_string(),
        };
        let v = serde_json::to_value(req).expect("should serialize");
        assert_eq!(v["title_id"], 5);
        assert_eq!(v["list_desc"], "Water plants");
    }

    #[test]
    fn test_add_list_response_contract_deserialize() {
        let parsed: AddListResponse =
            serde_json::from_str(r#"{"list_id": 7}"#).expect("response should parse");
        assert_eq!(parsed.list_id, 7);
    }

    #[test]
    fn test_update_list_request_serialization() {
        let req = UpdateListRequest {
            list_id: 7,
            list_desc: "Buy milk".to_string(),
        };
        let v = serde_json::to_value(req).expect("should serialize");
        assert_eq!(v["list_id"], 7);
        assert_eq!(v["list_desc"], "Buy milk");
    }

    #[test]
    fn test_delete_list_request_serialization() {
        let req = DeleteListRequest { list_id: 9 };
        let v = serde_json::to_value(req).expect("should serialize");
        assert_eq!(v["list_id"], 9);
    }

    #[test]
    fn test_api_client_new() {
        let client = ApiClient::new("http://localhost:3000".to_string());
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_endpoint_url_join() {
        let client = ApiClient::new("http://localhost:3000".to_string());
        assert_eq!(
            client.endpoint_url(&format!("/get-lists/{}", 5)),
            "http://localhost:3000/get-lists/5"
        );
    }
}
