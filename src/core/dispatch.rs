use crate::core::{Result, Submission, SubmissionStore};

/// Where a landing request is routed, based on how many submissions the
/// actor already owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    CreateForm,
    Detail(u64),
    Listing,
}

/// Pure routing decision: zero owned submissions go to the create form, a
/// single one goes straight to its detail view, two or more go to the list.
pub fn decide_landing(owned: &[Submission]) -> Landing {
    match owned {
        [] => Landing::CreateForm,
        [only] => Landing::Detail(only.id),
        _ => Landing::Listing,
    }
}

/// Resolves the landing route for `actor` against the store. No side effects.
pub async fn dispatch<S: SubmissionStore>(store: &S, actor: &str) -> Result<Landing> {
    let owned = store.list_by_owner(actor).await?;
    Ok(decide_landing(&owned))
}
