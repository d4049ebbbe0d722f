use ferrous_rdns_application::ports::HostnameResolver;
use ferrous_rdns_infrastructure::system::SystemHostnameResolver;
use std::net::IpAddr;
use std::time::Duration;

#[tokio::test]
async fn test_loopback_lookup_succeeds() {
    let resolver = SystemHostnameResolver::new(4);
    let ip: IpAddr = "127.0.0.1".parse().unwrap();

    let result = tokio::time::timeout(Duration::from_secs(10), resolver.resolve_hostname(ip))
        .await
        .expect("loopback lookup should not hang");

    // loopback is answered locally; the name itself depends on the host
    let answer = result.expect("loopback lookup should not fail");
    if let Some(name) = answer {
        assert!(!name.is_empty());
        assert_ne!(name, "127.0.0.1");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_parallel_lookups_share_the_pool() {
    let resolver = std::sync::Arc::new(SystemHostnameResolver::new(2));
    let ip: IpAddr = "127.0.0.1".parse().unwrap();

    let lookups = (0..6).map(|_| {
        let resolver = std::sync::Arc::clone(&resolver);
        tokio::spawn(async move { resolver.resolve_hostname(ip).await })
    });

    for lookup in lookups.collect::<Vec<_>>() {
        let result = tokio::time::timeout(Duration::from_secs(10), lookup)
            .await
            .expect("lookup should not hang")
            .unwrap();
        assert!(result.is_ok());
    }
}

#[test]
fn test_zero_concurrency_is_raised_to_one() {
    assert_eq!(SystemHostnameResolver::new(0).concurrency(), 1);
}
