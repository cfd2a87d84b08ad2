use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::SignedCookieJar;
use tera::Context;
use tracing::info;

use pantry_core::{DomainError, Item};

use crate::app::dto::ItemForm;
use crate::app::errors::WebError;
use crate::app::AppState;
use crate::flash::{self, Flash};

/// Inventory listing, ordered by category then name. Consumes any
/// pending flash and shows it once.
pub async fn index(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<Response, WebError> {
    let (jar, flash) = flash::take(jar);
    let items = state.store.list().await?;

    let mut context = Context::new();
    context.insert("items", &items);
    context.insert("flash", &flash);
    let page = state.templates.render("index.html", &context)?;
    Ok((jar, Html(page)).into_response())
}

pub async fn add_form(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<Response, WebError> {
    let (jar, flash) = flash::take(jar);
    let page = render_form(&state, None, flash.as_ref())?;
    Ok((jar, page).into_response())
}

/// On success, flashes and redirects to the listing. On a validation
/// failure the form is re-rendered directly with the reason; nothing is
/// stored and no redirect happens.
pub async fn add_submit(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<ItemForm>,
) -> Result<Response, WebError> {
    let (jar, _stale) = flash::take(jar);
    match form.to_draft() {
        Ok(draft) => {
            let item = state.store.insert(&draft).await?;
            info!(id = item.id, name = %item.name, "item added");
            let flash = Flash::success(format!("'{}' added to inventory.", item.name));
            Ok((flash::set(jar, &flash), Redirect::to("/")).into_response())
        }
        Err(reason) => {
            let page = render_form(&state, None, Some(&Flash::error(reason.to_string())))?;
            Ok((jar, page).into_response())
        }
    }
}

pub async fn edit_form(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let (jar, flash) = flash::take(jar);
    match state.store.get(id).await? {
        Some(item) => {
            let page = render_form(&state, Some(&item), flash.as_ref())?;
            Ok((jar, page).into_response())
        }
        None => {
            let flash = Flash::error(DomainError::not_found().to_string());
            Ok((flash::set(jar, &flash), Redirect::to("/")).into_response())
        }
    }
}

/// The item is looked up before the form is validated: submitting to a
/// vanished id reports "Item not found" rather than a field error. On a
/// validation failure the form re-renders with the stored values.
pub async fn edit_submit(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(id): Path<i64>,
    Form(form): Form<ItemForm>,
) -> Result<Response, WebError> {
    let (jar, _stale) = flash::take(jar);
    let Some(item) = state.store.get(id).await? else {
        let flash = Flash::error(DomainError::not_found().to_string());
        return Ok((flash::set(jar, &flash), Redirect::to("/")).into_response());
    };

    match form.to_draft() {
        Ok(draft) => {
            state.store.update(id, &draft).await?;
            info!(id, name = %draft.name, "item updated");
            let flash = Flash::success(format!("'{}' updated.", draft.name));
            Ok((flash::set(jar, &flash), Redirect::to("/")).into_response())
        }
        Err(reason) => {
            let page = render_form(&state, Some(&item), Some(&Flash::error(reason.to_string())))?;
            Ok((jar, page).into_response())
        }
    }
}

/// Deleting an id that does not exist is not an error; the redirect
/// happens either way, the flash only on an actual removal.
pub async fn delete(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let (jar, _stale) = flash::take(jar);
    let jar = match state.store.delete(id).await? {
        Some(name) => {
            info!(id, name = %name, "item deleted");
            flash::set(jar, &Flash::success(format!("'{name}' removed from inventory.")))
        }
        None => jar,
    };
    Ok((jar, Redirect::to("/")).into_response())
}

fn render_form(
    state: &AppState,
    item: Option<&Item>,
    flash: Option<&Flash>,
) -> Result<Html<String>, WebError> {
    let mut context = Context::new();
    context.insert("item", &item);
    context.insert("flash", &flash);
    Ok(Html(state.templates.render("form.html", &context)?))
}
