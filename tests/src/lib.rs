//! End-to-end scenarios across `nettopo-common` and `nettopo-core`.

#[cfg(test)]
mod util;

mod bottleneck {
    mod integration;
}
mod discovery {
    mod integration;
}
mod firewall {
    mod integration;
}
mod graph {
    mod integration;
}
mod layout {
    mod integration;
}
mod routing {
    mod integration;
}
