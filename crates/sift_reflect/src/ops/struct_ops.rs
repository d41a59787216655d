use crate::Reflect;

/// A reflected struct with named fields.
///
/// Field `i` corresponds to [`StructInfo::field_at(i)`](crate::info::StructInfo::field_at)
/// of the struct's type information; `field_at` is the accessor used to read it.
pub trait Struct: Reflect {
    /// Returns the number of reflected fields.
    fn field_len(&self) -> usize;

    /// Returns the value of the field at `index`, in declaration order.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the value of the field called `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        let index = self.reflect_type_info().as_struct().ok()?.index_of(name)?;
        self.field_at(index)
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::info::Typed;
    use crate::ops::ReflectRef;

    #[derive(Reflect)]
    #[reflect(rename_all = "camelCase")]
    struct Menu {
        menu_name: String,
        #[reflect(skip)]
        #[expect(dead_code, reason = "skipped by reflection")]
        cache_key: u64,
        #[reflect(rename = "kids")]
        children: Vec<Menu>,
    }

    #[derive(Reflect)]
    struct Pair<T> {
        left: T,
        right: Option<T>,
    }

    #[test]
    fn derived_fields_follow_attributes() {
        let info = Menu::type_info().as_struct().unwrap();
        let names: Vec<_> = info.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, ["menuName", "kids"]);
        assert!(core::ptr::eq(
            info.field("kids").unwrap().type_info(),
            <Vec<Menu> as Typed>::type_info()
        ));

        let menu = Menu {
            menu_name: "m1".into(),
            cache_key: 7,
            children: Vec::new(),
        };
        let ReflectRef::Struct(value) = menu.reflect_ref() else {
            panic!("not a struct");
        };
        assert_eq!(value.field_len(), 2);
        let name = value.field("menuName").unwrap();
        assert_eq!(name.downcast_ref::<String>().map(String::as_str), Some("m1"));
        assert!(value.field("cache_key").is_none());
        assert!(value.field_at(2).is_none());
    }

    #[test]
    fn generic_structs_get_one_info_per_instantiation() {
        let a = <Pair<u8> as Typed>::type_info();
        let b = <Pair<String> as Typed>::type_info();
        assert!(a.type_is::<Pair<u8>>());
        assert!(b.type_is::<Pair<String>>());
        assert!(core::ptr::eq(a, <Pair<u8> as Typed>::type_info()));

        let pair = Pair { left: 1_u8, right: None };
        let ReflectRef::Struct(value) = pair.reflect_ref() else {
            panic!("not a struct");
        };
        assert!(value.field("right").unwrap().is_null());
    }
}
