use picodocs_markup::Element;
use picodocs_markup::tags::{fieldset, form, input, label, legend, option, select, small, textarea};
use picodocs_outline::Section;

use crate::blocks::{component_demo as demo, hl, tag_code};

pub(super) fn chapter() -> Section {
    Section::new("Forms").subsections([
        Section::new("Overview")
            .description(
                "All form elements are fully responsive with pure semantic HTML, enabling forms \
                 to scale gracefully across devices and viewports.",
            )
            .content(demo(
                form().child(
                    fieldset()
                        .child(
                            label()
                                .child("First name")
                                .child(text_input("first_name", "First name").attr("autocomplete", "given-name")),
                        )
                        .child(
                            label()
                                .child("Email")
                                .child(
                                    input()
                                        .attr("type", "email")
                                        .attr("name", "email")
                                        .attr("placeholder", "Email")
                                        .attr("autocomplete", "email"),
                                ),
                        ),
                ),
                "<form>\n  <fieldset>\n    <label>\n      First name\n      <input name=\"first_name\" placeholder=\"First name\" autocomplete=\"given-name\" />\n    </label>\n    <label>\n      Email\n      <input type=\"email\" name=\"email\" placeholder=\"Email\" autocomplete=\"email\" />\n    </label>\n  </fieldset>\n</form>",
            )),
        Section::new("Input")
            .description("All input types are consistently styled and come with validation states.")
            .content(demo(
                fieldset()
                    .child(text_input("valid", "Valid").attr("aria-invalid", "false"))
                    .child(text_input("invalid", "Invalid").attr("aria-invalid", "true"))
                    .child(small().child("Please provide a valid value!")),
                "<input type=\"text\" name=\"valid\" placeholder=\"Valid\" aria-invalid=\"false\" />\n<input type=\"text\" name=\"invalid\" placeholder=\"Invalid\" aria-invalid=\"true\" />",
            )),
        Section::new("Textarea")
            .description(("The native ", tag_code("<textarea>"), " is styled like the input for consistency."))
            .content(demo(
                textarea()
                    .attr("name", "bio")
                    .attr("placeholder", "Write a professional short bio...")
                    .attr("aria-label", "Professional short bio"),
                "<textarea\n  name=\"bio\"\n  placeholder=\"Write a professional short bio...\"\n  aria-label=\"Professional short bio\"\n>\n</textarea>",
            )),
        Section::new("Select")
            .description(("The native ", tag_code("<select>"), " is styled like the input for consistency."))
            .content(demo(
                select()
                    .attr("name", "favorite-cuisine")
                    .attr("aria-label", "Select your favorite cuisine...")
                    .attr("required", "")
                    .child(option().attr("selected", "").attr("disabled", "").attr("value", "").child("Select your favorite cuisine..."))
                    .children(["Italian", "Japanese", "Indian", "Thai", "French"].map(|c| option().child(c))),
                "<select name=\"favorite-cuisine\" aria-label=\"Select your favorite cuisine...\" required>\n  <option selected disabled value=\"\">\n    Select your favorite cuisine...\n  </option>\n  <option>Italian</option>\n  …\n</select>",
            )),
        Section::new("Checkboxes")
            .description(("The native ", hl("<input type='checkbox'>"), " with a custom and responsive style."))
            .content(demo(
                choices("checkbox", "Language preferences:", &["English", "French", "Mandarin"]),
                "<fieldset>\n  <legend>Language preferences:</legend>\n  <label>\n    <input type=\"checkbox\" name=\"english\" />\n    English\n  </label>\n  …\n</fieldset>",
            )),
        Section::new("Radios")
            .description(("The native ", hl("<input type='radio'>"), " with a custom and responsive style."))
            .content(demo(
                choices("radio", "Language preference:", &["English", "French", "Mandarin"]),
                "<fieldset>\n  <legend>Language preference:</legend>\n  <label>\n    <input type=\"radio\" name=\"language\" />\n    English\n  </label>\n  …\n</fieldset>",
            )),
        Section::new("Switch")
            .description("A switch component in pure CSS, using the checkbox syntax.")
            .content(demo(
                fieldset().child(
                    label()
                        .child(input().attr("name", "terms").attr("type", "checkbox").attr("role", "switch"))
                        .child("I agree to the Terms"),
                ),
                "<label>\n  <input name=\"terms\" type=\"checkbox\" role=\"switch\" />\n  I agree to the Terms\n</label>",
            )),
        Section::new("Range")
            .description(("Create a slider control with ", hl("<input type='range'>"), "."))
            .content(demo(
                label()
                    .child("Brightness")
                    .child(input().attr("type", "range").attr("value", "50")),
                "<label>\n  Brightness\n  <input type=\"range\" value=\"50\" />\n</label>",
            )),
    ])
}

fn text_input(name: &str, placeholder: &str) -> Element {
    input()
        .attr("type", "text")
        .attr("name", name)
        .attr("placeholder", placeholder)
        .attr("aria-label", placeholder)
}

/// A fieldset of checkboxes or radios, one per choice.
fn choices(kind: &str, caption: &str, labels: &[&str]) -> Element {
    let items = labels.iter().enumerate().map(|(i, text)| {
        let name = if kind == "radio" {
            "language".to_owned()
        } else {
            text.to_lowercase()
        };
        let mut choice = input().attr("type", kind).attr("name", name);
        if i == 0 {
            choice.set_attr("checked", "");
        }
        label().child(choice).child(*text)
    });
    fieldset().child(legend().child(caption)).children(items)
}
