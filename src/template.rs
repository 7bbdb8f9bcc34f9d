//! Template lookup among a namespace's child types.
//!
//! The owning system keeps, per namespace, a list of template-bearing
//! objects (one per concrete model, policy or broker type). Picking the one
//! for a given template name is a linear first-match scan over whatever
//! order the collaborator returns.

/// An object declaring the template name it implements.
pub trait Templated {
    fn template(&self) -> &str;
}

/// Source of the child types registered under a namespace prefix.
pub trait ChildTypes {
    type Template: Templated;

    fn child_types(&self, namespace_prefix: &str) -> Vec<Self::Template>;
}

/// Returns the first child type of `namespace_prefix` whose template name is
/// `template_name`, or `None`.
///
/// If the collaborator lists several types with the same template name, the
/// earliest one wins.
///
/// # Examples
///
/// ```rust
/// use object_marshal::{new_object_from_template_name, ChildTypes, Templated};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Model { template: &'static str, label: &'static str }
///
/// impl Templated for Model {
///     fn template(&self) -> &str { self.template }
/// }
///
/// struct Models;
///
/// impl ChildTypes for Models {
///     type Template = Model;
///
///     fn child_types(&self, _namespace_prefix: &str) -> Vec<Model> {
///         vec![
///             Model { template: "linux_deploy", label: "first" },
///             Model { template: "linux_deploy", label: "second" },
///         ]
///     }
/// }
///
/// let found = new_object_from_template_name(&Models, "ProjectHanlon::ModelTemplate::", "linux_deploy");
/// assert_eq!(found.map(|m| m.label), Some("first"));
/// assert!(new_object_from_template_name(&Models, "ProjectHanlon::ModelTemplate::", "esxi").is_none());
/// ```
pub fn new_object_from_template_name<C>(
    child_types: &C,
    namespace_prefix: &str,
    template_name: &str,
) -> Option<C::Template>
where
    C: ChildTypes + ?Sized,
{
    let found = child_types
        .child_types(namespace_prefix)
        .into_iter()
        .find(|template| template.template() == template_name);
    if found.is_none() {
        tracing::debug!(namespace_prefix, template_name, "no child type matched");
    }
    found
}

/// Alias of [`new_object_from_template_name`].
pub fn new_object_from_type_name<C>(
    child_types: &C,
    namespace_prefix: &str,
    type_name: &str,
) -> Option<C::Template>
where
    C: ChildTypes + ?Sized,
{
    new_object_from_template_name(child_types, namespace_prefix, type_name)
}
