mod flatten;
mod kinematics;
mod malformed;
mod serializer;
