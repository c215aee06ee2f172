use yell_style::ColorName;
use yell_types::CustomValue;

/// A color binding for values of one user type.
///
/// `class` is compared against both the full type path and its last
/// segment, so config files can say `Point` for `geo::Point`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomClass {
    pub class: String,
    pub color: ColorName,
}

impl CustomClass {
    pub fn new(class: impl Into<String>, color: ColorName) -> Self {
        Self {
            class: class.into(),
            color,
        }
    }

    pub fn for_type<T: ?Sized>(color: ColorName) -> Self {
        Self::new(std::any::type_name::<T>(), color)
    }

    pub fn matches(&self, value: &CustomValue) -> bool {
        self.class == value.type_name || self.class == value.short_type_name()
    }
}

/// First registration matching `value`, in registration order.
pub fn match_class<'a>(classes: &'a [CustomClass], value: &CustomValue) -> Option<&'a CustomClass> {
    classes.iter().find(|c| c.matches(value))
}
