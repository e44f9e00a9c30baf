// This file is generated by rust-protobuf 3.7.2. Do not edit
// .proto file is parsed by pure
// @generated

// https://github.com/rust-lang/rust-clippy/issues/702
#![allow(unknown_lints)]
#![allow(clippy::all)]

#![allow(unused_attributes)]
#![cfg_attr(rustfmt, rustfmt::skip)]

#![allow(dead_code)]
#![allow(missing_docs)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(trivial_casts)]
#![allow(unused_results)]
#![allow(unused_mut)]

//! Generated file from `rendezvous.proto`

/// Generated files are compatible only with the same version
/// of protobuf runtime.
const _PROTOBUF_VERSION_CHECK: () = ::protobuf::VERSION_3_7_2;

// @@protoc_insertion_point(message:rendezvous.Register)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Register {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.Register.addr)
    pub addr: ::std::string::String,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.Register.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Register {
    fn default() -> &'a Register {
        <Register as ::protobuf::Message>::default_instance()
    }
}

impl Register {
    pub fn new() -> Register {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "addr",
            |m: &Register| { &m.addr },
            |m: &mut Register| { &mut m.addr },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Register>(
            "Register",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Register {
    const NAME: &'static str = "Register";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.addr = is.read_string()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if !self.addr.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.addr);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if !self.addr.is_empty() {
            os.write_string(1, &self.addr)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Register {
        Register::new()
    }

    fn clear(&mut self) {
        self.addr.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Register {
        static instance: Register = Register {
            addr: ::std::string::String::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Register {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Register").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Register {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Register {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.Query)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Query {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.Query.addr)
    pub addr: ::std::string::String,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.Query.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Query {
    fn default() -> &'a Query {
        <Query as ::protobuf::Message>::default_instance()
    }
}

impl Query {
    pub fn new() -> Query {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "addr",
            |m: &Query| { &m.addr },
            |m: &mut Query| { &mut m.addr },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Query>(
            "Query",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Query {
    const NAME: &'static str = "Query";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.addr = is.read_string()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if !self.addr.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.addr);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if !self.addr.is_empty() {
            os.write_string(1, &self.addr)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Query {
        Query::new()
    }

    fn clear(&mut self) {
        self.addr.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Query {
        static instance: Query = Query {
            addr: ::std::string::String::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Query {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Query").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Query {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Query {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.Bye)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Bye {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.Bye.addr)
    pub addr: ::std::string::String,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.Bye.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Bye {
    fn default() -> &'a Bye {
        <Bye as ::protobuf::Message>::default_instance()
    }
}

impl Bye {
    pub fn new() -> Bye {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "addr",
            |m: &Bye| { &m.addr },
            |m: &mut Bye| { &mut m.addr },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Bye>(
            "Bye",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Bye {
    const NAME: &'static str = "Bye";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.addr = is.read_string()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if !self.addr.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.addr);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if !self.addr.is_empty() {
            os.write_string(1, &self.addr)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Bye {
        Bye::new()
    }

    fn clear(&mut self) {
        self.addr.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Bye {
        static instance: Bye = Bye {
            addr: ::std::string::String::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Bye {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Bye").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Bye {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Bye {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.Request)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Request {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.Request.key)
    pub key: ::std::string::String,
    // @@protoc_insertion_point(field:rendezvous.Request.path)
    pub path: ::std::string::String,
    // @@protoc_insertion_point(field:rendezvous.Request.seq)
    pub seq: u32,
    // message oneof groups
    pub cmd: ::std::option::Option<request::Cmd>,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.Request.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Request {
    fn default() -> &'a Request {
        <Request as ::protobuf::Message>::default_instance()
    }
}

impl Request {
    pub fn new() -> Request {
        ::std::default::Default::default()
    }

    // .rendezvous.Register register = 4;

    pub fn register(&self) -> &Register {
        match self.cmd {
            ::std::option::Option::Some(request::Cmd::Register(ref v)) => v,
            _ => <Register as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_register(&mut self) {
        self.cmd = ::std::option::Option::None;
    }

    pub fn has_register(&self) -> bool {
        match self.cmd {
            ::std::option::Option::Some(request::Cmd::Register(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_register(&mut self, v: Register) {
        self.cmd = ::std::option::Option::Some(request::Cmd::Register(v))
    }

    // Mutable pointer to the field.
    pub fn mut_register(&mut self) -> &mut Register {
        if let ::std::option::Option::Some(request::Cmd::Register(_)) = self.cmd {
        } else {
            self.cmd = ::std::option::Option::Some(request::Cmd::Register(Register::new()));
        }
        match self.cmd {
            ::std::option::Option::Some(request::Cmd::Register(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_register(&mut self) -> Register {
        if self.has_register() {
            match self.cmd.take() {
                ::std::option::Option::Some(request::Cmd::Register(v)) => v,
                _ => panic!(),
            }
        } else {
            Register::new()
        }
    }

    // .rendezvous.Query query = 5;

    pub fn query(&self) -> &Query {
        match self.cmd {
            ::std::option::Option::Some(request::Cmd::Query(ref v)) => v,
            _ => <Query as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_query(&mut self) {
        self.cmd = ::std::option::Option::None;
    }

    pub fn has_query(&self) -> bool {
        match self.cmd {
            ::std::option::Option::Some(request::Cmd::Query(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_query(&mut self, v: Query) {
        self.cmd = ::std::option::Option::Some(request::Cmd::Query(v))
    }

    // Mutable pointer to the field.
    pub fn mut_query(&mut self) -> &mut Query {
        if let ::std::option::Option::Some(request::Cmd::Query(_)) = self.cmd {
        } else {
            self.cmd = ::std::option::Option::Some(request::Cmd::Query(Query::new()));
        }
        match self.cmd {
            ::std::option::Option::Some(request::Cmd::Query(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_query(&mut self) -> Query {
        if self.has_query() {
            match self.cmd.take() {
                ::std::option::Option::Some(request::Cmd::Query(v)) => v,
                _ => panic!(),
            }
        } else {
            Query::new()
        }
    }

    // .rendezvous.Bye bye = 6;

    pub fn bye(&self) -> &Bye {
        match self.cmd {
            ::std::option::Option::Some(request::Cmd::Bye(ref v)) => v,
            _ => <Bye as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_bye(&mut self) {
        self.cmd = ::std::option::Option::None;
    }

    pub fn has_bye(&self) -> bool {
        match self.cmd {
            ::std::option::Option::Some(request::Cmd::Bye(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_bye(&mut self, v: Bye) {
        self.cmd = ::std::option::Option::Some(request::Cmd::Bye(v))
    }

    // Mutable pointer to the field.
    pub fn mut_bye(&mut self) -> &mut Bye {
        if let ::std::option::Option::Some(request::Cmd::Bye(_)) = self.cmd {
        } else {
            self.cmd = ::std::option::Option::Some(request::Cmd::Bye(Bye::new()));
        }
        match self.cmd {
            ::std::option::Option::Some(request::Cmd::Bye(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_bye(&mut self) -> Bye {
        if self.has_bye() {
            match self.cmd.take() {
                ::std::option::Option::Some(request::Cmd::Bye(v)) => v,
                _ => panic!(),
            }
        } else {
            Bye::new()
        }
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(6);
        let mut oneofs = ::std::vec::Vec::with_capacity(1);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "key",
            |m: &Request| { &m.key },
            |m: &mut Request| { &mut m.key },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "path",
            |m: &Request| { &m.path },
            |m: &mut Request| { &mut m.path },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "seq",
            |m: &Request| { &m.seq },
            |m: &mut Request| { &mut m.seq },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, Register>(
            "register",
            Request::has_register,
            Request::register,
            Request::mut_register,
            Request::set_register,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, Query>(
            "query",
            Request::has_query,
            Request::query,
            Request::mut_query,
            Request::set_query,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, Bye>(
            "bye",
            Request::has_bye,
            Request::bye,
            Request::mut_bye,
            Request::set_bye,
        ));
        oneofs.push(request::Cmd::generated_oneof_descriptor_data());
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Request>(
            "Request",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Request {
    const NAME: &'static str = "Request";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.key = is.read_string()?;
                },
                18 => {
                    self.path = is.read_string()?;
                },
                24 => {
                    self.seq = is.read_uint32()?;
                },
                34 => {
                    self.cmd = ::std::option::Option::Some(request::Cmd::Register(is.read_message()?));
                },
                42 => {
                    self.cmd = ::std::option::Option::Some(request::Cmd::Query(is.read_message()?));
                },
                50 => {
                    self.cmd = ::std::option::Option::Some(request::Cmd::Bye(is.read_message()?));
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if !self.key.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.key);
        }
        if !self.path.is_empty() {
            my_size += ::protobuf::rt::string_size(2, &self.path);
        }
        if self.seq != 0 {
            my_size += ::protobuf::rt::uint32_size(3, self.seq);
        }
        if let ::std::option::Option::Some(ref v) = self.cmd {
            match v {
                &request::Cmd::Register(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
                &request::Cmd::Query(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
                &request::Cmd::Bye(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
            };
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if !self.key.is_empty() {
            os.write_string(1, &self.key)?;
        }
        if !self.path.is_empty() {
            os.write_string(2, &self.path)?;
        }
        if self.seq != 0 {
            os.write_uint32(3, self.seq)?;
        }
        if let ::std::option::Option::Some(ref v) = self.cmd {
            match v {
                &request::Cmd::Register(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(4, v, os)?;
                },
                &request::Cmd::Query(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(5, v, os)?;
                },
                &request::Cmd::Bye(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(6, v, os)?;
                },
            };
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Request {
        Request::new()
    }

    fn clear(&mut self) {
        self.key.clear();
        self.path.clear();
        self.seq = 0;
        self.cmd = ::std::option::Option::None;
        self.cmd = ::std::option::Option::None;
        self.cmd = ::std::option::Option::None;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Request {
        static instance: Request = Request {
            key: ::std::string::String::new(),
            path: ::std::string::String::new(),
            seq: 0,
            cmd: ::std::option::Option::None,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Request {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Request").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Request {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Request {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

/// Nested message and enums of message `Request`
pub mod request {

    #[derive(Clone,PartialEq,Debug)]
    #[non_exhaustive]
    // @@protoc_insertion_point(oneof:rendezvous.Request.cmd)
    pub enum Cmd {
        // @@protoc_insertion_point(oneof_field:rendezvous.Request.register)
        Register(super::Register),
        // @@protoc_insertion_point(oneof_field:rendezvous.Request.query)
        Query(super::Query),
        // @@protoc_insertion_point(oneof_field:rendezvous.Request.bye)
        Bye(super::Bye),
    }

    impl ::protobuf::Oneof for Cmd {
    }

    impl ::protobuf::OneofFull for Cmd {
        fn descriptor() -> ::protobuf::reflect::OneofDescriptor {
            static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::OneofDescriptor> = ::protobuf::rt::Lazy::new();
            descriptor.get(|| <super::Request as ::protobuf::MessageFull>::descriptor().oneof_by_name("cmd").unwrap()).clone()
        }
    }

    impl Cmd {
        pub(in super) fn generated_oneof_descriptor_data() -> ::protobuf::reflect::GeneratedOneofDescriptorData {
            ::protobuf::reflect::GeneratedOneofDescriptorData::new::<Cmd>("cmd")
        }
    }
}

// @@protoc_insertion_point(message:rendezvous.Accepted)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Accepted {
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.Accepted.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Accepted {
    fn default() -> &'a Accepted {
        <Accepted as ::protobuf::Message>::default_instance()
    }
}

impl Accepted {
    pub fn new() -> Accepted {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(0);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Accepted>(
            "Accepted",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Accepted {
    const NAME: &'static str = "Accepted";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Accepted {
        Accepted::new()
    }

    fn clear(&mut self) {
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Accepted {
        static instance: Accepted = Accepted {
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Accepted {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Accepted").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Accepted {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Accepted {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.Retry)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Retry {
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.Retry.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Retry {
    fn default() -> &'a Retry {
        <Retry as ::protobuf::Message>::default_instance()
    }
}

impl Retry {
    pub fn new() -> Retry {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(0);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Retry>(
            "Retry",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Retry {
    const NAME: &'static str = "Retry";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Retry {
        Retry::new()
    }

    fn clear(&mut self) {
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Retry {
        static instance: Retry = Retry {
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Retry {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Retry").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Retry {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Retry {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.Peer)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Peer {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.Peer.addr)
    pub addr: ::std::string::String,
    // @@protoc_insertion_point(field:rendezvous.Peer.age_ms)
    pub age_ms: u64,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.Peer.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Peer {
    fn default() -> &'a Peer {
        <Peer as ::protobuf::Message>::default_instance()
    }
}

impl Peer {
    pub fn new() -> Peer {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(2);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "addr",
            |m: &Peer| { &m.addr },
            |m: &mut Peer| { &mut m.addr },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "age_ms",
            |m: &Peer| { &m.age_ms },
            |m: &mut Peer| { &mut m.age_ms },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Peer>(
            "Peer",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Peer {
    const NAME: &'static str = "Peer";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.addr = is.read_string()?;
                },
                16 => {
                    self.age_ms = is.read_uint64()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if !self.addr.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.addr);
        }
        if self.age_ms != 0 {
            my_size += ::protobuf::rt::uint64_size(2, self.age_ms);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if !self.addr.is_empty() {
            os.write_string(1, &self.addr)?;
        }
        if self.age_ms != 0 {
            os.write_uint64(2, self.age_ms)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Peer {
        Peer::new()
    }

    fn clear(&mut self) {
        self.addr.clear();
        self.age_ms = 0;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Peer {
        static instance: Peer = Peer {
            addr: ::std::string::String::new(),
            age_ms: 0,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Peer {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Peer").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Peer {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Peer {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.Fail)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Fail {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.Fail.reason)
    pub reason: ::std::string::String,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.Fail.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Fail {
    fn default() -> &'a Fail {
        <Fail as ::protobuf::Message>::default_instance()
    }
}

impl Fail {
    pub fn new() -> Fail {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "reason",
            |m: &Fail| { &m.reason },
            |m: &mut Fail| { &mut m.reason },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Fail>(
            "Fail",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Fail {
    const NAME: &'static str = "Fail";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.reason = is.read_string()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if !self.reason.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.reason);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if !self.reason.is_empty() {
            os.write_string(1, &self.reason)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Fail {
        Fail::new()
    }

    fn clear(&mut self) {
        self.reason.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Fail {
        static instance: Fail = Fail {
            reason: ::std::string::String::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Fail {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Fail").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Fail {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Fail {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.Response)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Response {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.Response.seq)
    pub seq: u32,
    // message oneof groups
    pub cmd: ::std::option::Option<response::Cmd>,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.Response.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Response {
    fn default() -> &'a Response {
        <Response as ::protobuf::Message>::default_instance()
    }
}

impl Response {
    pub fn new() -> Response {
        ::std::default::Default::default()
    }

    // .rendezvous.Accepted accepted = 2;

    pub fn accepted(&self) -> &Accepted {
        match self.cmd {
            ::std::option::Option::Some(response::Cmd::Accepted(ref v)) => v,
            _ => <Accepted as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_accepted(&mut self) {
        self.cmd = ::std::option::Option::None;
    }

    pub fn has_accepted(&self) -> bool {
        match self.cmd {
            ::std::option::Option::Some(response::Cmd::Accepted(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_accepted(&mut self, v: Accepted) {
        self.cmd = ::std::option::Option::Some(response::Cmd::Accepted(v))
    }

    // Mutable pointer to the field.
    pub fn mut_accepted(&mut self) -> &mut Accepted {
        if let ::std::option::Option::Some(response::Cmd::Accepted(_)) = self.cmd {
        } else {
            self.cmd = ::std::option::Option::Some(response::Cmd::Accepted(Accepted::new()));
        }
        match self.cmd {
            ::std::option::Option::Some(response::Cmd::Accepted(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_accepted(&mut self) -> Accepted {
        if self.has_accepted() {
            match self.cmd.take() {
                ::std::option::Option::Some(response::Cmd::Accepted(v)) => v,
                _ => panic!(),
            }
        } else {
            Accepted::new()
        }
    }

    // .rendezvous.Retry retry = 3;

    pub fn retry(&self) -> &Retry {
        match self.cmd {
            ::std::option::Option::Some(response::Cmd::Retry(ref v)) => v,
            _ => <Retry as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_retry(&mut self) {
        self.cmd = ::std::option::Option::None;
    }

    pub fn has_retry(&self) -> bool {
        match self.cmd {
            ::std::option::Option::Some(response::Cmd::Retry(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_retry(&mut self, v: Retry) {
        self.cmd = ::std::option::Option::Some(response::Cmd::Retry(v))
    }

    // Mutable pointer to the field.
    pub fn mut_retry(&mut self) -> &mut Retry {
        if let ::std::option::Option::Some(response::Cmd::Retry(_)) = self.cmd {
        } else {
            self.cmd = ::std::option::Option::Some(response::Cmd::Retry(Retry::new()));
        }
        match self.cmd {
            ::std::option::Option::Some(response::Cmd::Retry(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_retry(&mut self) -> Retry {
        if self.has_retry() {
            match self.cmd.take() {
                ::std::option::Option::Some(response::Cmd::Retry(v)) => v,
                _ => panic!(),
            }
        } else {
            Retry::new()
        }
    }

    // .rendezvous.Peer peer = 4;

    pub fn peer(&self) -> &Peer {
        match self.cmd {
            ::std::option::Option::Some(response::Cmd::Peer(ref v)) => v,
            _ => <Peer as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_peer(&mut self) {
        self.cmd = ::std::option::Option::None;
    }

    pub fn has_peer(&self) -> bool {
        match self.cmd {
            ::std::option::Option::Some(response::Cmd::Peer(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_peer(&mut self, v: Peer) {
        self.cmd = ::std::option::Option::Some(response::Cmd::Peer(v))
    }

    // Mutable pointer to the field.
    pub fn mut_peer(&mut self) -> &mut Peer {
        if let ::std::option::Option::Some(response::Cmd::Peer(_)) = self.cmd {
        } else {
            self.cmd = ::std::option::Option::Some(response::Cmd::Peer(Peer::new()));
        }
        match self.cmd {
            ::std::option::Option::Some(response::Cmd::Peer(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_peer(&mut self) -> Peer {
        if self.has_peer() {
            match self.cmd.take() {
                ::std::option::Option::Some(response::Cmd::Peer(v)) => v,
                _ => panic!(),
            }
        } else {
            Peer::new()
        }
    }

    // .rendezvous.Fail fail = 5;

    pub fn fail(&self) -> &Fail {
        match self.cmd {
            ::std::option::Option::Some(response::Cmd::Fail(ref v)) => v,
            _ => <Fail as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_fail(&mut self) {
        self.cmd = ::std::option::Option::None;
    }

    pub fn has_fail(&self) -> bool {
        match self.cmd {
            ::std::option::Option::Some(response::Cmd::Fail(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_fail(&mut self, v: Fail) {
        self.cmd = ::std::option::Option::Some(response::Cmd::Fail(v))
    }

    // Mutable pointer to the field.
    pub fn mut_fail(&mut self) -> &mut Fail {
        if let ::std::option::Option::Some(response::Cmd::Fail(_)) = self.cmd {
        } else {
            self.cmd = ::std::option::Option::Some(response::Cmd::Fail(Fail::new()));
        }
        match self.cmd {
            ::std::option::Option::Some(response::Cmd::Fail(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_fail(&mut self) -> Fail {
        if self.has_fail() {
            match self.cmd.take() {
                ::std::option::Option::Some(response::Cmd::Fail(v)) => v,
                _ => panic!(),
            }
        } else {
            Fail::new()
        }
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(5);
        let mut oneofs = ::std::vec::Vec::with_capacity(1);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "seq",
            |m: &Response| { &m.seq },
            |m: &mut Response| { &mut m.seq },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, Accepted>(
            "accepted",
            Response::has_accepted,
            Response::accepted,
            Response::mut_accepted,
            Response::set_accepted,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, Retry>(
            "retry",
            Response::has_retry,
            Response::retry,
            Response::mut_retry,
            Response::set_retry,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, Peer>(
            "peer",
            Response::has_peer,
            Response::peer,
            Response::mut_peer,
            Response::set_peer,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, Fail>(
            "fail",
            Response::has_fail,
            Response::fail,
            Response::mut_fail,
            Response::set_fail,
        ));
        oneofs.push(response::Cmd::generated_oneof_descriptor_data());
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Response>(
            "Response",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Response {
    const NAME: &'static str = "Response";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.seq = is.read_uint32()?;
                },
                18 => {
                    self.cmd = ::std::option::Option::Some(response::Cmd::Accepted(is.read_message()?));
                },
                26 => {
                    self.cmd = ::std::option::Option::Some(response::Cmd::Retry(is.read_message()?));
                },
                34 => {
                    self.cmd = ::std::option::Option::Some(response::Cmd::Peer(is.read_message()?));
                },
                42 => {
                    self.cmd = ::std::option::Option::Some(response::Cmd::Fail(is.read_message()?));
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.seq != 0 {
            my_size += ::protobuf::rt::uint32_size(1, self.seq);
        }
        if let ::std::option::Option::Some(ref v) = self.cmd {
            match v {
                &response::Cmd::Accepted(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
                &response::Cmd::Retry(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
                &response::Cmd::Peer(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
                &response::Cmd::Fail(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
            };
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.seq != 0 {
            os.write_uint32(1, self.seq)?;
        }
        if let ::std::option::Option::Some(ref v) = self.cmd {
            match v {
                &response::Cmd::Accepted(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
                },
                &response::Cmd::Retry(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(3, v, os)?;
                },
                &response::Cmd::Peer(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(4, v, os)?;
                },
                &response::Cmd::Fail(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(5, v, os)?;
                },
            };
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Response {
        Response::new()
    }

    fn clear(&mut self) {
        self.seq = 0;
        self.cmd = ::std::option::Option::None;
        self.cmd = ::std::option::Option::None;
        self.cmd = ::std::option::Option::None;
        self.cmd = ::std::option::Option::None;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Response {
        static instance: Response = Response {
            seq: 0,
            cmd: ::std::option::Option::None,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Response {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Response").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Response {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Response {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

/// Nested message and enums of message `Response`
pub mod response {

    #[derive(Clone,PartialEq,Debug)]
    #[non_exhaustive]
    // @@protoc_insertion_point(oneof:rendezvous.Response.cmd)
    pub enum Cmd {
        // @@protoc_insertion_point(oneof_field:rendezvous.Response.accepted)
        Accepted(super::Accepted),
        // @@protoc_insertion_point(oneof_field:rendezvous.Response.retry)
        Retry(super::Retry),
        // @@protoc_insertion_point(oneof_field:rendezvous.Response.peer)
        Peer(super::Peer),
        // @@protoc_insertion_point(oneof_field:rendezvous.Response.fail)
        Fail(super::Fail),
    }

    impl ::protobuf::Oneof for Cmd {
    }

    impl ::protobuf::OneofFull for Cmd {
        fn descriptor() -> ::protobuf::reflect::OneofDescriptor {
            static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::OneofDescriptor> = ::protobuf::rt::Lazy::new();
            descriptor.get(|| <super::Response as ::protobuf::MessageFull>::descriptor().oneof_by_name("cmd").unwrap()).clone()
        }
    }

    impl Cmd {
        pub(in super) fn generated_oneof_descriptor_data() -> ::protobuf::reflect::GeneratedOneofDescriptorData {
            ::protobuf::reflect::GeneratedOneofDescriptorData::new::<Cmd>("cmd")
        }
    }
}

static file_descriptor_proto_data: &'static [u8] = b"\
    \n\x10rendezvous.proto\x12\nrendezvous\"\x1e\n\x08Register\x12\x12\n\x04\
    addr\x18\x01\x20\x01(\tR\x04addr\"\x1b\n\x05Query\x12\x12\n\x04addr\x18\
    \x01\x20\x01(\tR\x04addr\"\x19\n\x03Bye\x12\x12\n\x04addr\x18\x01\x20\
    \x01(\tR\x04addr\"\xcc\x01\n\x07Request\x12\x10\n\x03key\x18\x01\x20\x01\
    (\tR\x03key\x12\x12\n\x04path\x18\x02\x20\x01(\tR\x04path\x12\x10\n\x03s\
    eq\x18\x03\x20\x01(\rR\x03seq\x122\n\x08register\x18\x04\x20\x01(\x0b2\
    \x14.rendezvous.RegisterH\0R\x08register\x12)\n\x05query\x18\x05\x20\x01\
    (\x0b2\x11.rendezvous.QueryH\0R\x05query\x12#\n\x03bye\x18\x06\x20\x01(\
    \x0b2\x0f.rendezvous.ByeH\0R\x03byeB\x05\n\x03cmd\"\n\n\x08Accepted\"\
    \x07\n\x05Retry\"1\n\x04Peer\x12\x12\n\x04addr\x18\x01\x20\x01(\tR\x04ad\
    dr\x12\x15\n\x06age_ms\x18\x02\x20\x01(\x04R\x05ageMs\"\x1e\n\x04Fail\
    \x12\x16\n\x06reason\x18\x01\x20\x01(\tR\x06reason\"\xd2\x01\n\x08Respon\
    se\x12\x10\n\x03seq\x18\x01\x20\x01(\rR\x03seq\x122\n\x08accepted\x18\
    \x02\x20\x01(\x0b2\x14.rendezvous.AcceptedH\0R\x08accepted\x12)\n\x05ret\
    ry\x18\x03\x20\x01(\x0b2\x11.rendezvous.RetryH\0R\x05retry\x12&\n\x04pee\
    r\x18\x04\x20\x01(\x0b2\x10.rendezvous.PeerH\0R\x04peer\x12&\n\x04fail\
    \x18\x05\x20\x01(\x0b2\x10.rendezvous.FailH\0R\x04failB\x05\n\x03cmdb\
    \x06proto3\
";

/// `FileDescriptorProto` object which was a source for this generated file
fn file_descriptor_proto() -> &'static ::protobuf::descriptor::FileDescriptorProto {
    static file_descriptor_proto_lazy: ::protobuf::rt::Lazy<::protobuf::descriptor::FileDescriptorProto> = ::protobuf::rt::Lazy::new();
    file_descriptor_proto_lazy.get(|| {
        ::protobuf::Message::parse_from_bytes(file_descriptor_proto_data).unwrap()
    })
}

/// `FileDescriptor` object which allows dynamic access to files
pub fn file_descriptor() -> &'static ::protobuf::reflect::FileDescriptor {
    static generated_file_descriptor_lazy: ::protobuf::rt::Lazy<::protobuf::reflect::GeneratedFileDescriptor> = ::protobuf::rt::Lazy::new();
    static file_descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::FileDescriptor> = ::protobuf::rt::Lazy::new();
    file_descriptor.get(|| {
        let generated_file_descriptor = generated_file_descriptor_lazy.get(|| {
            let mut deps = ::std::vec::Vec::with_capacity(0);
            let mut messages = ::std::vec::Vec::with_capacity(9);
            messages.push(Register::generated_message_descriptor_data());
            messages.push(Query::generated_message_descriptor_data());
            messages.push(Bye::generated_message_descriptor_data());
            messages.push(Request::generated_message_descriptor_data());
            messages.push(Accepted::generated_message_descriptor_data());
            messages.push(Retry::generated_message_descriptor_data());
            messages.push(Peer::generated_message_descriptor_data());
            messages.push(Fail::generated_message_descriptor_data());
            messages.push(Response::generated_message_descriptor_data());
            let mut enums = ::std::vec::Vec::with_capacity(0);
            ::protobuf::reflect::GeneratedFileDescriptor::new_generated(
                file_descriptor_proto(),
                deps,
                messages,
                enums,
            )
        });
        ::protobuf::reflect::FileDescriptor::new_generated_2(generated_file_descriptor)
    })
}
