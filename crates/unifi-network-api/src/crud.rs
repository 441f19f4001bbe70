// Generic resource CRUD
//
// One implementation of create/get/list/update/delete, parameterized by
// the `Resource` trait. Legacy REST endpoints answer every call with an
// array (even singleton operations); v2 endpoints answer with a single
// object and need a list scan when the single-resource GET misbehaves.

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::NetworkClient;
use crate::error::Error;
use crate::request::RequestDescriptor;
use crate::route::Dialect;

/// A controller configuration entity addressable by identifier.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync {
    /// Logical endpoint, e.g. `networkconf` or `apgroups`.
    const ENDPOINT: &'static str;

    /// URL and response convention of [`Self::ENDPOINT`].
    const DIALECT: Dialect = Dialect::Rest;

    /// Server-assigned identifier (`_id`), absent before create.
    fn id(&self) -> Option<&str>;

    /// Display name used by [`NetworkClient::find_by_name`]. Kinds
    /// without one never match a name lookup.
    fn name(&self) -> Option<&str> {
        None
    }

    /// JSON body sent on create (`id == None`) and update (`id == Some`).
    ///
    /// Defaults to the record itself. Overridden where the controller's
    /// schema needs fields forced or defaulted.
    fn request_body(&self, _id: Option<&str>) -> Result<serde_json::Value, Error> {
        serde_json::to_value(self).map_err(Error::Serialization)
    }

    /// The request that deletes the record with this identifier.
    fn delete_request(id: &str) -> Result<RequestDescriptor, Error> {
        Ok(RequestDescriptor::delete(
            Self::DIALECT,
            format!("{}/{id}", Self::ENDPOINT),
        ))
    }
}

impl NetworkClient {
    // ━━ Typed CRUD ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// Create a record and return the controller's copy (with `_id`).
    pub async fn create<T: Resource>(&self, item: &T) -> Result<T, Error> {
        let body = item.request_body(None)?;
        match T::DIALECT {
            Dialect::V2 => {
                let req =
                    RequestDescriptor::new(Method::POST, Dialect::V2, T::ENDPOINT).with_json(&body)?;
                self.request(req).await
            }
            dialect => self.array_create(dialect, T::ENDPOINT, &body).await,
        }
    }

    /// Fetch one record by identifier.
    pub async fn get<T: Resource>(&self, id: &str) -> Result<T, Error> {
        match T::DIALECT {
            Dialect::V2 => self.v2_get(id).await,
            dialect => self.array_get(dialect, T::ENDPOINT, id).await,
        }
    }

    /// List every record of this kind. An empty collection is not an error.
    pub async fn list<T: Resource>(&self) -> Result<Vec<T>, Error> {
        self.request_list(RequestDescriptor::get(T::DIALECT, T::ENDPOINT))
            .await
    }

    /// The first record of this kind whose name is exactly `name`.
    ///
    /// The controller has no server-side filter, so this lists the
    /// collection and scans it in order.
    pub async fn find_by_name<T: Resource>(&self, name: &str) -> Result<T, Error> {
        let items = self.list::<T>().await?;
        debug!(endpoint = T::ENDPOINT, name, count = items.len(), "scanning by name");
        items
            .into_iter()
            .find(|item| item.name() == Some(name))
            .ok_or_else(|| Error::NotFound {
                endpoint: T::ENDPOINT.to_owned(),
                id: name.to_owned(),
            })
    }

    /// Replace the record with this identifier and return the new state.
    pub async fn update<T: Resource>(&self, id: &str, item: &T) -> Result<T, Error> {
        let body = item.request_body(Some(id))?;
        match T::DIALECT {
            Dialect::V2 => {
                let req = RequestDescriptor::new(
                    Method::PUT,
                    Dialect::V2,
                    format!("{}/{id}", T::ENDPOINT),
                )
                .with_json(&body)?;
                self.request(req).await
            }
            dialect => self.array_update(dialect, T::ENDPOINT, id, &body).await,
        }
    }

    /// Delete the record with this identifier. The response body is ignored.
    pub async fn delete<T: Resource>(&self, id: &str) -> Result<(), Error> {
        self.request_discard(T::delete_request(id)?).await
    }

    // ━━ Endpoint-level REST primitives ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// `POST rest/{endpoint}`; the first element of the array response.
    pub async fn rest_create<T, B>(&self, endpoint: &str, item: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        self.array_create(Dialect::Rest, endpoint, item).await
    }

    /// `GET rest/{endpoint}/{id}`; the first element of the array response.
    pub async fn rest_get<T: DeserializeOwned>(&self, endpoint: &str, id: &str) -> Result<T, Error> {
        self.array_get(Dialect::Rest, endpoint, id).await
    }

    /// `GET rest/{endpoint}`; the array as-is.
    pub async fn rest_list<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>, Error> {
        self.request_list(RequestDescriptor::get(Dialect::Rest, endpoint))
            .await
    }

    /// `PUT rest/{endpoint}/{id}`, falling back to a get on an empty array.
    pub async fn rest_update<T, B>(&self, endpoint: &str, id: &str, item: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        self.array_update(Dialect::Rest, endpoint, id, item).await
    }

    /// `DELETE rest/{endpoint}/{id}`.
    pub async fn rest_delete(&self, endpoint: &str, id: &str) -> Result<(), Error> {
        self.request_discard(RequestDescriptor::delete(
            Dialect::Rest,
            format!("{endpoint}/{id}"),
        ))
        .await
    }

    // ── Array-convention internals ───────────────────────────────────

    async fn array_create<T, B>(&self, dialect: Dialect, endpoint: &str, item: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let req = RequestDescriptor::new(Method::POST, dialect, endpoint).with_json(item)?;
        let items: Vec<T> = self.request_list(req).await?;
        items.into_iter().next().ok_or_else(|| Error::EmptyResponse {
            endpoint: endpoint.to_owned(),
        })
    }

    async fn array_get<T: DeserializeOwned>(
        &self,
        dialect: Dialect,
        endpoint: &str,
        id: &str,
    ) -> Result<T, Error> {
        let req = RequestDescriptor::get(dialect, format!("{endpoint}/{id}"));
        let items: Vec<T> = self.request_list(req).await?;
        items.into_iter().next().ok_or_else(|| Error::NotFound {
            endpoint: endpoint.to_owned(),
            id: id.to_owned(),
        })
    }

    async fn array_update<T, B>(
        &self,
        dialect: Dialect,
        endpoint: &str,
        id: &str,
        item: &B,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let req =
            RequestDescriptor::new(Method::PUT, dialect, format!("{endpoint}/{id}")).with_json(item)?;
        let items: Vec<T> = self.request_list(req).await?;
        let first = items.into_iter().next();
        if let Some(item) = first {
            return Ok(item);
        }

        // Some controller builds acknowledge a PUT with no payload.
        debug!(endpoint, id, "update returned no elements, re-reading");
        self.array_get(dialect, endpoint, id).await
    }

    // ── v2 internals ─────────────────────────────────────────────────

    /// Single-object GET, falling back to a scan of the list when the
    /// single-resource endpoint fails. If the scan finds nothing (or the
    /// list itself fails) the original error is returned.
    async fn v2_get<T: Resource>(&self, id: &str) -> Result<T, Error> {
        let req = RequestDescriptor::get(Dialect::V2, format!("{}/{id}", T::ENDPOINT));
        let err = match self.request::<T>(req).await {
            Ok(item) => return Ok(item),
            Err(err) => err,
        };

        debug!(
            endpoint = T::ENDPOINT,
            id,
            error = %err,
            "v2 get failed, falling back to list scan"
        );

        match self.list::<T>().await {
            Ok(items) => items
                .into_iter()
                .find(|item| item.id() == Some(id))
                .ok_or(err),
            Err(list_err) => {
                debug!(endpoint = T::ENDPOINT, error = %list_err, "list scan failed");
                Err(err)
            }
        }
    }
}
