use core::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use core::time::Duration;
use std::path::PathBuf;
use std::time::SystemTime;

crate::impl_reflect_opaque!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr);
crate::impl_reflect_opaque!(PathBuf => |v, f| f.write_str(&v.to_string_lossy()));
crate::impl_reflect_opaque!(Duration => |v, f| ::core::fmt::Debug::fmt(v, f));
crate::impl_reflect_opaque!(SystemTime => |v, f| ::core::fmt::Debug::fmt(v, f));

#[cfg(test)]
mod tests {
    use core::net::Ipv4Addr;
    use core::time::Duration;

    use crate::Reflect;
    use crate::ops::ReflectRef;

    fn text(value: &dyn Reflect) -> String {
        match value.reflect_ref() {
            ReflectRef::Opaque(v) => v.to_string(),
            _ => panic!("not opaque"),
        }
    }

    #[test]
    fn opaque_text() {
        assert_eq!(text(&Ipv4Addr::LOCALHOST), "127.0.0.1");
        assert_eq!(text(&Duration::from_millis(1500)), "1.5s");
    }
}
