
error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Toml(::toml::de::Error);
    }

    errors {
        #[doc = "A behavior was built without any required resource."]
        EmptyRequirements(behavior: String) {
            description("behavior has no required resources")
            display("behavior '{}' declares no required resources", behavior)
        }
        #[doc = "A behavior requires a resource the scheduler never registered."]
        UnknownResource(behavior: String, resource: usize) {
            description("unknown resource")
            display("behavior '{}' requires unregistered resource #{}", behavior, resource)
        }
        #[doc = "A second default behavior was offered to the same resource."]
        DuplicateDefault(resource: String) {
            description("resource already has a default behavior")
            display("resource '{}' already has a default behavior", resource)
        }
        #[doc = "A default behavior must require its own resource and nothing else."]
        InvalidDefault(resource: String, behavior: String) {
            description("invalid default behavior")
            display("default '{}' for resource '{}' must require exactly that resource",
                    behavior, resource)
        }
        InvalidConfig(msg: String) {
            description("invalid configuration")
            display("invalid configuration: {}", msg)
        }
        #[doc = "An error message from the gamepad backend."]
        Gamepad(msg: String) {
            description("gamepad error")
            display("{}", msg)
        }
    }
}
