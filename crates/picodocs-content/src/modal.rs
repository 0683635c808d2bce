//! Modal dialog demo.
//!
//! The launcher loads the dialog from `/modal` into `#modal`; the dialog's
//! close button loads the empty fragment from `/close_modal` in its place.

use picodocs_markup::tags::{article, button, dialog, div, header, li, p, strong, ul};
use picodocs_markup::{Element, Node};

/// Route returning the dialog fragment.
pub const MODAL_ROUTE: &str = "/modal";

/// Route returning the empty fragment.
pub const CLOSE_MODAL_ROUTE: &str = "/close_modal";

/// Button that opens the dialog, followed by the mount point it swaps into.
#[must_use]
pub fn modal_launcher() -> Node {
    let launch = button()
        .class("contrast")
        .attr("hx-get", MODAL_ROUTE)
        .attr("hx-target", "#modal")
        .attr("hx-swap", "innerHTML")
        .child("Launch demo modal");
    (launch, div().id("modal")).into()
}

/// The open dialog.
#[must_use]
pub fn modal_fragment() -> Element {
    let close = button()
        .attr("aria-label", "Close")
        .attr("rel", "prev")
        .attr("hx-get", CLOSE_MODAL_ROUTE)
        .attr("hx-target", "#modal")
        .attr("hx-swap", "innerHTML");

    dialog().attr("open", "").child(
        article()
            .child(
                header()
                    .child(close)
                    .child(p().child(strong().child("🗓️ Thank You for Registering!"))),
            )
            .child(p().child(
                "We're excited to have you join us for our upcoming event. \
                 Please arrive at the museum on time to check in and get started.",
            ))
            .child(
                ul().child(li().child(("Date: ", strong().child("Saturday, April 15"))))
                    .child(li().child(("Time: ", strong().child("10:00am - 12:00pm")))),
            ),
    )
}

/// Fragment returned when the dialog closes: nothing.
#[must_use]
pub fn close_modal_fragment() -> Node {
    Node::Fragment(Vec::new())
}
