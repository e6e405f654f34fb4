// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::{AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, AWS_SESSION_TOKEN};
use crate::Credential;
use agcod_core::{Context, ProvideCredential, Result};
use async_trait::async_trait;

/// EnvCredentialProvider loads credentials from environment variables.
///
/// The variable names are configurable so that the same provider can read
/// both the standard AWS names and client specific ones. By default it looks
/// for:
///
/// - `AWS_ACCESS_KEY_ID`
/// - `AWS_SECRET_ACCESS_KEY`
/// - `AWS_SESSION_TOKEN` (optional)
#[derive(Debug, Clone)]
pub struct EnvCredentialProvider {
    access_key_id: String,
    secret_access_key: String,
    session_token: String,
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::with_names(AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, AWS_SESSION_TOKEN)
    }
}

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider reading the standard AWS variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider reading custom variable names.
    pub fn with_names(access_key_id: &str, secret_access_key: &str, session_token: &str) -> Self {
        Self {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
            session_token: session_token.to_string(),
        }
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let access_key_id = ctx.env_var(&self.access_key_id);
        let secret_access_key = ctx.env_var(&self.secret_access_key);

        match (access_key_id, secret_access_key) {
            (Some(ak), Some(sk)) if !ak.is_empty() && !sk.is_empty() => {
                let cred = Credential::new(&ak, &sk);
                Ok(Some(match ctx.env_var(&self.session_token) {
                    Some(token) => cred.with_session_token(&token),
                    None => cred,
                }))
            }
            _ => Ok(None),
        }
    }
}
