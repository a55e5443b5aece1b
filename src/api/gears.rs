// SPDX-License-Identifier: MIT

//! `gears` resource group.

use crate::error::Result;
use crate::http::ApiClient;
use crate::models::Gear;

/// Get gear by its string ID (`b…` for bikes, `g…` for shoes).
pub async fn get(client: &ApiClient, gear_id: &str) -> Result<Gear> {
    client.get(&format!("/gear/{gear_id}"), &[]).await
}
