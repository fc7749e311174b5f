use crate::page::Styled;

pub const BODY_TRANSITION: &str = "opacity 0.5s ease";

/// First half of the load fade: body transparent, transition armed.
pub fn begin<S: Styled + ?Sized>(body: &S) {
    body.set_style("opacity", "0");
    body.set_style("transition", BODY_TRANSITION);
}

/// Second half, run after the fade delay.
pub fn finish<S: Styled + ?Sized>(body: &S) {
    body.set_style("opacity", "1");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::testing::FakeNode;

    #[test]
    fn body_goes_from_transparent_to_opaque() {
        let body = FakeNode::default();
        begin(&body);
        assert_eq!(body.style("opacity").as_deref(), Some("0"));
        assert_eq!(body.style("transition").as_deref(), Some(BODY_TRANSITION));
        finish(&body);
        assert_eq!(body.style("opacity").as_deref(), Some("1"));
        assert_eq!(body.style("transition").as_deref(), Some(BODY_TRANSITION));
    }
}
