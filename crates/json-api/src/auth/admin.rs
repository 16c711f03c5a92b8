//! Admin-only route guard.

use salvo::prelude::*;

use crate::{errors::ApiError, extensions::*};

/// Reject callers whose principal is not an admin.
///
/// Must run after [`super::middleware::handler`].
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    match depot.principal_or_401() {
        Ok(principal) if principal.is_admin() => {
            ctrl.call_next(req, depot, res).await;
        }
        Ok(_) => {
            res.render(ApiError::forbidden("admin access required"));
            ctrl.skip_rest();
        }
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();
        }
    }
}
