//! Task Transport Seam
//!
//! The capabilities the task list needs from the backend, plus the
//! Tauri-command-backed implementation used by the app.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::models::{ListId, Task};
use crate::query::TaskQueryParams;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> JsValue;
}

/// One page of the task collection, with the backend-reported page count.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskPage {
    pub tasks: Vec<Task>,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

/// Backend capabilities consumed by the synchronized task list.
///
/// `update` must return the authoritative post-write task; server-computed
/// fields win over the locally merged value.
#[async_trait(?Send)]
pub trait TaskApi {
    async fn fetch_page(
        &self,
        list_id: ListId,
        params: &TaskQueryParams,
        page: usize,
    ) -> Result<TaskPage, String>;

    async fn create(&self, task: Task) -> Result<Task, String>;

    async fn update(&self, task: Task) -> Result<Task, String>;
}

// ========================
// Command Argument Structs
// ========================

#[derive(Serialize)]
struct GetAllTasksArgs<'a> {
    #[serde(rename = "listId")]
    list_id: ListId,
    params: &'a TaskQueryParams,
    page: usize,
}

#[derive(Serialize)]
struct TaskArgs<'a> {
    task: &'a Task,
}

/// Transport implementation over the Tauri `invoke` bridge.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackendApi;

#[async_trait(?Send)]
impl TaskApi for BackendApi {
    async fn fetch_page(
        &self,
        list_id: ListId,
        params: &TaskQueryParams,
        page: usize,
    ) -> Result<TaskPage, String> {
        let args = GetAllTasksArgs {
            list_id,
            params,
            page,
        };
        let js_args = serde_wasm_bindgen::to_value(&args).map_err(|e| e.to_string())?;
        let result = invoke("get_all_tasks", js_args).await;
        serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
    }

    async fn create(&self, task: Task) -> Result<Task, String> {
        let js_args =
            serde_wasm_bindgen::to_value(&TaskArgs { task: &task }).map_err(|e| e.to_string())?;
        let result = invoke("create_task", js_args).await;
        serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
    }

    async fn update(&self, task: Task) -> Result<Task, String> {
        let js_args =
            serde_wasm_bindgen::to_value(&TaskArgs { task: &task }).map_err(|e| e.to_string())?;
        let result = invoke("update_task", js_args).await;
        serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
    }
}
