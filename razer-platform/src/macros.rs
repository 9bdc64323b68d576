#[macro_export]
macro_rules! has_attr {
    ($(#[$doc_comment:meta])? $attr_name:literal $item:ident) => {
        concat_idents::concat_idents!(fn_name = has_, $attr_name {
            $(#[$doc_comment])*
            pub fn fn_name(&self) -> bool {
                $crate::has_attr(&self.$item, $attr_name)
            }
        });
    };
}

#[macro_export]
macro_rules! get_attr_string {
    ($(#[$doc_comment:meta])? $attr_name:literal $item:ident) => {
        concat_idents::concat_idents!(fn_name = get_, $attr_name {
            $(#[$doc_comment])*
            pub fn fn_name(&self) -> Result<String> {
                $crate::read_attr_string(&self.$item, $attr_name)
            }
        });
    };
}

#[macro_export]
macro_rules! set_attr_bytes {
    ($(#[$doc_comment:meta])? $attr_name:literal $item:ident) => {
        concat_idents::concat_idents!(fn_name = set_, $attr_name {
            $(#[$doc_comment])*
            pub fn fn_name(&self, values: &[u8]) -> Result<()> {
                $crate::write_attr_bytes(&self.$item, $attr_name, values)
            }
        });
    };
}

/// Read only text attribute
#[macro_export]
macro_rules! attr_string {
    ($attr_name:literal, $item:ident) => {
        $crate::has_attr!($attr_name $item);
        $crate::get_attr_string!($attr_name $item);
    };
}

/// Write only binary attribute
#[macro_export]
macro_rules! attr_bytes {
    ($attr_name:literal, $item:ident) => {
        $crate::has_attr!($attr_name $item);
        $crate::set_attr_bytes!($attr_name $item);
    };
}
