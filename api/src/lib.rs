// client-side api for the portfolio site
//
// the site has no server of its own, so the only "api" is the outbound call to the
// email delivery provider plus the contact form state that drives it.  everything
// in here compiles for the host as well as wasm32 so that the state logic can be
// tested without a browser
pub mod contact;
pub mod email;
